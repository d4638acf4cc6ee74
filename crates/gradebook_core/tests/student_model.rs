use gradebook_core::{Score, StudentRecord, StudentValidationError};

fn sample_record() -> StudentRecord {
    StudentRecord {
        name: "Amina Rahman".to_string(),
        student_id: "GB-2026-001".to_string(),
        section: "Alpha".to_string(),
        contact: "01700000001".to_string(),
        courses: vec!["c-js".to_string(), "c-web".to_string()],
        score: Score::graded(88.0),
        remarks: "Strong JS".to_string(),
    }
}

#[test]
fn record_serializes_with_expected_wire_fields() {
    let record = sample_record();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["name"], "Amina Rahman");
    assert_eq!(json["studentId"], "GB-2026-001");
    assert_eq!(json["section"], "Alpha");
    assert_eq!(json["contact"], "01700000001");
    assert_eq!(json["courses"], serde_json::json!(["c-js", "c-web"]));
    assert_eq!(json["score"], 88);
    assert_eq!(json["remarks"], "Strong JS");

    let decoded: StudentRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn ungraded_score_serializes_as_empty_string() {
    let mut record = sample_record();
    record.score = Score::Ungraded;

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["score"], "");

    let decoded: StudentRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.score, Score::Ungraded);
}

#[test]
fn score_deserializes_from_number_null_or_missing() {
    let graded: Score = serde_json::from_str("91.5").unwrap();
    assert_eq!(graded, Score::Graded(91.5));

    let from_null: Score = serde_json::from_str("null").unwrap();
    assert_eq!(from_null, Score::Ungraded);

    let record: StudentRecord = serde_json::from_str(
        r#"{"name":"B","studentId":"S2","section":"Beta","contact":"017"}"#,
    )
    .unwrap();
    assert_eq!(record.score, Score::Ungraded);
    assert!(record.courses.is_empty());
    assert_eq!(record.remarks, "");
}

#[test]
fn score_rejects_non_empty_text() {
    let err = serde_json::from_str::<Score>(r#""eighty""#).unwrap_err();
    assert!(err.to_string().contains("score must be a number"));
}

#[test]
fn graded_scores_are_clamped_into_range() {
    assert_eq!(Score::graded(120.0), Score::Graded(100.0));
    assert_eq!(Score::graded(-5.0), Score::Graded(0.0));
    assert_eq!(Score::graded(42.5), Score::Graded(42.5));
}

#[test]
fn graded_zero_is_distinct_from_ungraded() {
    let zero = Score::graded(0.0);
    assert!(zero.is_graded());
    assert_eq!(zero.value(), Some(0.0));
    assert_ne!(zero, Score::Ungraded);
    assert_eq!(Score::Ungraded.value(), None);
}

#[test]
fn from_input_maps_none_to_ungraded() {
    assert_eq!(Score::from_input(None), Score::Ungraded);
    assert_eq!(Score::from_input(Some(70.0)), Score::Graded(70.0));
}

#[test]
fn score_text_drops_trailing_fraction_when_integral() {
    assert_eq!(Score::graded(88.0).text(), "88");
    assert_eq!(Score::graded(88.5).text(), "88.5");
    assert_eq!(Score::Ungraded.text(), "");
}

#[test]
fn integral_scores_serialize_without_fraction() {
    let raw = serde_json::to_string(&Score::graded(90.0)).unwrap();
    assert_eq!(raw, "90");

    let raw = serde_json::to_string(&Score::graded(90.25)).unwrap();
    assert_eq!(raw, "90.25");
}

#[test]
fn validate_rejects_blank_name_and_id() {
    let mut record = sample_record();
    record.name = "   ".to_string();
    assert_eq!(
        record.validate().unwrap_err(),
        StudentValidationError::BlankName
    );

    let mut record = sample_record();
    record.student_id = String::new();
    assert_eq!(
        record.validate().unwrap_err(),
        StudentValidationError::BlankStudentId
    );

    assert!(sample_record().validate().is_ok());
}
