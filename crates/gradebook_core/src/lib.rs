//! Core domain logic for the gradebook roster manager.
//! This crate is the single source of truth for roster invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::student::{Score, StudentRecord, StudentValidationError};
pub use query::engine::{
    average, by_section, count, filter_and_sort, snapshot, top_by_score, RosterQuery,
    RosterSnapshot, SortDir, SortKey,
};
pub use repo::roster_repo::{
    RepoError, RepoResult, RosterRepository, SqliteRosterRepository, ROSTER_STORAGE_KEY,
};
pub use store::roster_store::{RosterStore, StoreError, StoreResult};
pub use view::catalog::{Course, CourseCatalog};
pub use view::projections::{format_course_list, progress_percent, score_badge, ScoreBadge, ScoreTier};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
