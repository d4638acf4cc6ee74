use gradebook_core::db::open_db_in_memory;
use gradebook_core::{
    RepoError, RosterRepository, RosterStore, Score, SqliteRosterRepository, StoreError,
    StudentRecord, StudentValidationError,
};
use rusqlite::Connection;

fn record(name: &str, id: &str, section: &str, score: Option<f64>) -> StudentRecord {
    let mut record = StudentRecord::new(name, id, section, "0170000000");
    record.score = Score::from_input(score);
    record
}

fn open_store(conn: &Connection) -> RosterStore<SqliteRosterRepository<'_>> {
    RosterStore::open(SqliteRosterRepository::new(conn), Vec::new()).unwrap()
}

#[test]
fn create_then_find_returns_clamped_record() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    store
        .create(record("Amina", "S1", "Alpha", Some(140.0)))
        .unwrap();

    let found = store.find("S1").unwrap();
    assert_eq!(found.name, "Amina");
    assert_eq!(found.score, Score::Graded(100.0));
}

#[test]
fn create_duplicate_id_fails_and_leaves_roster_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    store.create(record("Amina", "S1", "Alpha", Some(90.0))).unwrap();
    store.create(record("Badal", "S2", "Beta", Some(70.0))).unwrap();
    let before: Vec<StudentRecord> = store.records().to_vec();

    let err = store
        .create(record("Impostor", "S1", "Gamma", None))
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId(id) if id == "S1"));
    assert_eq!(store.records(), before.as_slice());
}

#[test]
fn create_rejects_blank_fields() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let err = store.create(record("", "S1", "Alpha", None)).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(StudentValidationError::BlankName)
    ));
    assert!(store.records().is_empty());
}

#[test]
fn update_with_same_id_always_succeeds() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    store.create(record("Amina", "S1", "Alpha", Some(90.0))).unwrap();
    store.create(record("Badal", "S2", "Beta", Some(70.0))).unwrap();

    let mut candidate = record("Amina Rahman", "S1", "Gamma", Some(95.0));
    candidate.remarks = "moved section".to_string();
    store.update("S1", candidate).unwrap();

    let updated = store.find("S1").unwrap();
    assert_eq!(updated.name, "Amina Rahman");
    assert_eq!(updated.section, "Gamma");
}

#[test]
fn update_preserves_record_position() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    store.create(record("A", "S1", "Alpha", None)).unwrap();
    store.create(record("B", "S2", "Beta", None)).unwrap();
    store.create(record("C", "S3", "Gamma", None)).unwrap();

    store.update("S2", record("B2", "S9", "Beta", None)).unwrap();

    let ids: Vec<&str> = store
        .records()
        .iter()
        .map(|r| r.student_id.as_str())
        .collect();
    assert_eq!(ids, ["S1", "S9", "S3"]);
}

#[test]
fn update_rejects_id_owned_by_another_record() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    store.create(record("Amina", "S1", "Alpha", None)).unwrap();
    store.create(record("Badal", "S2", "Beta", None)).unwrap();

    let err = store
        .update("S2", record("Badal", "S1", "Beta", None))
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId(id) if id == "S1"));
    assert!(store.find("S2").is_some());
}

#[test]
fn update_missing_record_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    let err = store
        .update("ghost", record("G", "ghost", "Alpha", None))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == "ghost"));
}

#[test]
fn delete_removes_record_and_missing_id_never_mutates() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    store.create(record("Amina", "S1", "Alpha", None)).unwrap();
    store.delete("S1").unwrap();
    assert!(store.find("S1").is_none());

    let err = store.delete("S1").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == "S1"));
    assert!(store.records().is_empty());
}

#[test]
fn mutations_persist_across_store_instances() {
    let conn = open_db_in_memory().unwrap();

    let mut store = open_store(&conn);
    store.create(record("Amina", "S1", "Alpha", Some(88.0))).unwrap();
    drop(store);

    let reopened = open_store(&conn);
    assert_eq!(reopened.records().len(), 1);
    assert_eq!(reopened.find("S1").unwrap().score, Score::Graded(88.0));
}

#[test]
fn seed_if_empty_installs_and_persists_seed_once() {
    let conn = open_db_in_memory().unwrap();
    let seed = vec![record("Seeded", "SEED-1", "Alpha", Some(75.0))];

    let mut store =
        RosterStore::open(SqliteRosterRepository::new(&conn), seed.clone()).unwrap();
    assert_eq!(store.seed_if_empty().unwrap().len(), 1);
    assert_eq!(store.seed_if_empty().unwrap().len(), 1);

    store.create(record("Amina", "S1", "Beta", None)).unwrap();
    assert_eq!(store.seed_if_empty().unwrap().len(), 2);

    let reopened = RosterStore::open(SqliteRosterRepository::new(&conn), seed).unwrap();
    assert_eq!(reopened.records().len(), 2);
}

#[test]
fn seed_if_empty_with_empty_seed_is_a_no_op_roster() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);

    assert!(store.seed_if_empty().unwrap().is_empty());
    assert!(store.seed_if_empty().unwrap().is_empty());
}

#[test]
fn reset_to_seed_discards_existing_records() {
    let conn = open_db_in_memory().unwrap();
    let seed = vec![record("Seeded", "SEED-1", "Alpha", None)];

    let mut store = RosterStore::open(SqliteRosterRepository::new(&conn), seed).unwrap();
    store.create(record("Amina", "S1", "Beta", None)).unwrap();
    store.create(record("Badal", "S2", "Gamma", None)).unwrap();

    let reseeded = store.reset_to_seed().unwrap();
    assert_eq!(reseeded.len(), 1);
    assert_eq!(reseeded[0].student_id, "SEED-1");

    let reopened = RosterStore::open(
        SqliteRosterRepository::new(&conn),
        Vec::new(),
    )
    .unwrap();
    assert_eq!(reopened.records().len(), 1);
}

#[test]
fn export_json_is_pretty_printed_wire_shape() {
    let conn = open_db_in_memory().unwrap();
    let mut store = open_store(&conn);
    store.create(record("Amina", "S1", "Alpha", Some(88.0))).unwrap();

    let json = store.export_json().unwrap();
    assert!(json.contains("\n"));
    assert!(json.contains("\"studentId\": \"S1\""));

    let decoded: Vec<StudentRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, store.records());
}

/// Repository whose saves always fail, for rollback checks.
struct FailingRepository;

impl RosterRepository for FailingRepository {
    fn load(&self) -> Result<Vec<StudentRecord>, RepoError> {
        Ok(Vec::new())
    }

    fn save(&self, _records: &[StudentRecord]) -> Result<(), RepoError> {
        Err(RepoError::from(rusqlite::Error::QueryReturnedNoRows))
    }

    fn clear(&self) -> Result<(), RepoError> {
        Ok(())
    }
}

#[test]
fn failed_save_rolls_back_the_in_memory_mutation() {
    let mut store = RosterStore::open(FailingRepository, Vec::new()).unwrap();

    let err = store.create(record("Amina", "S1", "Alpha", None)).unwrap_err();
    assert!(matches!(err, StoreError::Repo(_)));
    assert!(store.records().is_empty());
}
