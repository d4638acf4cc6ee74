//! Course catalog lookup.
//!
//! # Responsibility
//! - Hold the externally-supplied course list and answer id-to-title
//!   lookups.
//!
//! # Invariants
//! - The core treats catalog entries as opaque configuration; it never
//!   enforces referential integrity between records and the catalog.

use serde::{Deserialize, Serialize};

/// Catalog entry supplied by the surrounding application layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub weeks: u32,
    pub level: String,
    pub description: String,
}

/// Ordered course list with id-based title lookup.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Title for a course id, if the catalog knows it.
    pub fn title_for(&self, id: &str) -> Option<&str> {
        self.courses
            .iter()
            .find(|course| course.id == id)
            .map(|course| course.title.as_str())
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
