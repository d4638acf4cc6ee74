//! Roster query engine: search, sort, section scoping, aggregation.
//!
//! # Responsibility
//! - Implement the filter/sort pipeline behind the roster table view.
//! - Compute aggregate statistics consumed by several views.
//!
//! # Invariants
//! - Sorting is stable; ties keep the input (insertion) order.
//! - Direction inverts the comparison, never the tie-break.
//! - Aggregates distinguish "no graded records" from a mean of zero.

use crate::model::student::StudentRecord;
use serde::Serialize;

/// Field a roster listing can be ordered by.
///
/// Every key compares its field's lowercased string form, so scores order
/// lexically here; numeric ranking lives in [`top_by_score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    StudentId,
    Section,
    Contact,
    Score,
}

/// Listing sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

/// Options for [`filter_and_sort`].
#[derive(Debug, Clone, Default)]
pub struct RosterQuery {
    /// Free-text filter; matched case-insensitively after trimming.
    pub search: String,
    pub sort_key: SortKey,
    pub sort_dir: SortDir,
}

impl RosterQuery {
    /// Creates a query with the default ordering (name, ascending).
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }
}

/// Aggregated view of a record subset.
///
/// Derived on every query; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterSnapshot {
    pub records: Vec<StudentRecord>,
    pub total: usize,
    /// Rounded mean of graded scores; `None` when nothing is graded.
    pub average: Option<i64>,
}

/// Filters by free-text search, then orders by the chosen field.
///
/// The search text matches when it is a substring of the space-joined
/// `name studentId section` haystack; an empty search matches everything.
pub fn filter_and_sort(records: &[StudentRecord], query: &RosterQuery) -> Vec<StudentRecord> {
    let needle = query.search.trim().to_lowercase();

    let mut rows: Vec<StudentRecord> = records
        .iter()
        .filter(|record| needle.is_empty() || search_haystack(record).contains(&needle))
        .cloned()
        .collect();

    rows.sort_by(|a, b| {
        let ordering = sort_text(a, query.sort_key).cmp(&sort_text(b, query.sort_key));
        match query.sort_dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    });

    rows
}

/// Records whose section equals `section`; `None` or an empty value
/// returns the full roster.
pub fn by_section(records: &[StudentRecord], section: Option<&str>) -> Vec<StudentRecord> {
    match section {
        None => records.to_vec(),
        Some(section) if section.is_empty() => records.to_vec(),
        Some(section) => records
            .iter()
            .filter(|record| record.section == section)
            .cloned()
            .collect(),
    }
}

/// Mean of graded scores, rounded to the nearest integer.
///
/// Returns `None` when no record is graded; callers render that as a
/// placeholder, not as zero.
pub fn average(records: &[StudentRecord]) -> Option<i64> {
    let graded: Vec<f64> = records
        .iter()
        .filter_map(|record| record.score.value())
        .collect();

    if graded.is_empty() {
        return None;
    }

    let mean = graded.iter().sum::<f64>() / graded.len() as f64;
    Some(mean.round() as i64)
}

/// Graded records ranked by score descending, truncated to `limit`.
///
/// Ties keep their pre-ranking order (stable sort).
pub fn top_by_score(records: &[StudentRecord], limit: usize) -> Vec<StudentRecord> {
    let mut graded: Vec<StudentRecord> = records
        .iter()
        .filter(|record| record.score.is_graded())
        .cloned()
        .collect();

    graded.sort_by(|a, b| {
        let a_score = a.score.value().unwrap_or(f64::NEG_INFINITY);
        let b_score = b.score.value().unwrap_or(f64::NEG_INFINITY);
        b_score.total_cmp(&a_score)
    });
    graded.truncate(limit);

    graded
}

/// Total record count regardless of grading status.
pub fn count(records: &[StudentRecord]) -> usize {
    records.len()
}

/// Builds the aggregated snapshot for a record subset.
pub fn snapshot(records: &[StudentRecord]) -> RosterSnapshot {
    RosterSnapshot {
        total: count(records),
        average: average(records),
        records: records.to_vec(),
    }
}

fn search_haystack(record: &StudentRecord) -> String {
    format!(
        "{} {} {}",
        record.name, record.student_id, record.section
    )
    .to_lowercase()
}

fn sort_text(record: &StudentRecord, key: SortKey) -> String {
    let raw = match key {
        SortKey::Name => record.name.clone(),
        SortKey::StudentId => record.student_id.clone(),
        SortKey::Section => record.section.clone(),
        SortKey::Contact => record.contact.clone(),
        SortKey::Score => record.score.text(),
    };
    raw.to_lowercase()
}
