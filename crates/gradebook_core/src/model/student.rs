//! Student record domain model.
//!
//! # Responsibility
//! - Define the canonical roster record and its serialized wire shape.
//! - Represent the optional score as an explicit tagged type.
//!
//! # Invariants
//! - Wire field names are `name, studentId, section, contact, courses,
//!   score, remarks`; this exact shape is the persistence and export
//!   contract.
//! - `Score::Graded(0.0)` and `Score::Ungraded` are distinct states.
//! - A graded score is clamped into [0, 100] at construction, never
//!   rejected.

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const SCORE_MIN: f64 = 0.0;
const SCORE_MAX: f64 = 100.0;

/// Optional exam score.
///
/// `Ungraded` means the score is absent; it is not a score of zero. On the
/// wire it is the empty string, while a graded value is a plain JSON
/// number (missing and `null` are read as `Ungraded` for tolerance).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Score {
    #[default]
    Ungraded,
    Graded(f64),
}

impl Score {
    /// Creates a graded score, clamping the input into [0, 100].
    ///
    /// Non-finite input is treated as ungraded rather than stored.
    pub fn graded(value: f64) -> Self {
        if !value.is_finite() {
            return Self::Ungraded;
        }
        Self::Graded(value.clamp(SCORE_MIN, SCORE_MAX))
    }

    /// Creates a score from optional numeric input (`None` = ungraded).
    pub fn from_input(value: Option<f64>) -> Self {
        value.map_or(Self::Ungraded, Self::graded)
    }

    pub fn is_graded(&self) -> bool {
        matches!(self, Self::Graded(_))
    }

    /// Returns the numeric value of a graded score.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Ungraded => None,
            Self::Graded(value) => Some(*value),
        }
    }

    /// String form used for display and string-keyed sorting.
    ///
    /// Ungraded maps to the empty string; integral values print without a
    /// fractional part (`88`, not `88.0`).
    pub fn text(&self) -> String {
        match self {
            Self::Ungraded => String::new(),
            Self::Graded(value) => format_score_number(*value),
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Ungraded => serializer.serialize_str(""),
            Self::Graded(value) => {
                if value.fract() == 0.0 {
                    serializer.serialize_i64(*value as i64)
                } else {
                    serializer.serialize_f64(*value)
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawScore {
            Number(f64),
            Text(String),
        }

        match Option::<RawScore>::deserialize(deserializer)? {
            None => Ok(Self::Ungraded),
            Some(RawScore::Number(value)) => Ok(Self::graded(value)),
            Some(RawScore::Text(text)) if text.trim().is_empty() => Ok(Self::Ungraded),
            Some(RawScore::Text(text)) => Err(DeError::custom(format!(
                "score must be a number or empty string, got `{text}`"
            ))),
        }
    }
}

fn format_score_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Canonical roster record.
///
/// `courses` holds raw course ids; the core stores and displays them
/// without enforcing referential integrity against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub name: String,
    pub student_id: String,
    pub section: String,
    pub contact: String,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub score: Score,
    #[serde(default)]
    pub remarks: String,
}

impl StudentRecord {
    /// Creates a record with no courses, no score and empty remarks.
    pub fn new(
        name: impl Into<String>,
        student_id: impl Into<String>,
        section: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            student_id: student_id.into(),
            section: section.into(),
            contact: contact.into(),
            courses: Vec::new(),
            score: Score::Ungraded,
            remarks: String::new(),
        }
    }

    /// Validates invariants the form layer cannot be trusted to enforce.
    ///
    /// # Errors
    /// - `BlankName` when `name` is empty or whitespace.
    /// - `BlankStudentId` when `student_id` is empty or whitespace.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        if self.name.trim().is_empty() {
            return Err(StudentValidationError::BlankName);
        }
        if self.student_id.trim().is_empty() {
            return Err(StudentValidationError::BlankStudentId);
        }
        Ok(())
    }
}

/// Validation error for roster records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentValidationError {
    BlankName,
    BlankStudentId,
}

impl Display for StudentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "student name must not be blank"),
            Self::BlankStudentId => write!(f, "student id must not be blank"),
        }
    }
}

impl Error for StudentValidationError {}
