//! Roster store implementation.
//!
//! # Responsibility
//! - Hold the canonical record list, seeded from persistence at startup.
//! - Enforce id uniqueness and record validation on every mutation.
//!
//! # Invariants
//! - At most one record per `student_id` at any time.
//! - Record slots are insertion-ordered; an update replaces a record in
//!   place and never moves it.
//! - A failed save rolls the in-memory change back, so callers never
//!   observe a partially-applied mutation.

use crate::model::student::{StudentRecord, StudentValidationError};
use crate::repo::roster_repo::{RepoError, RosterRepository};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Mutation error for roster store operations.
#[derive(Debug)]
pub enum StoreError {
    /// The id is already owned by a different record.
    DuplicateId(String),
    /// No record matches the referenced id.
    NotFound(String),
    Validation(StudentValidationError),
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "student id already exists: {id}"),
            Self::NotFound(id) => write!(f, "student not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateId(_) | Self::NotFound(_) => None,
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<StudentValidationError> for StoreError {
    fn from(value: StudentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Canonical roster state plus its persistence handle and seed set.
pub struct RosterStore<R: RosterRepository> {
    repo: R,
    seed: Vec<StudentRecord>,
    records: Vec<StudentRecord>,
}

impl<R: RosterRepository> RosterStore<R> {
    /// Opens the store by loading the persisted roster.
    ///
    /// Missing or malformed persisted data yields an empty roster; see the
    /// repository contract.
    pub fn open(repo: R, seed: Vec<StudentRecord>) -> StoreResult<Self> {
        let records = repo.load()?;
        Ok(Self {
            repo,
            seed,
            records,
        })
    }

    /// Installs the seed set when the roster is empty; otherwise a no-op.
    ///
    /// Idempotent: calling it repeatedly never changes a non-empty roster.
    pub fn seed_if_empty(&mut self) -> StoreResult<&[StudentRecord]> {
        if self.records.is_empty() {
            self.records = self.seed.clone();
            self.repo.save(&self.records)?;
            info!(
                "event=roster_seed module=store status=ok count={}",
                self.records.len()
            );
        }
        Ok(&self.records)
    }

    /// Current records in insertion order.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Finds a record by its id.
    pub fn find(&self, student_id: &str) -> Option<&StudentRecord> {
        self.records
            .iter()
            .find(|record| record.student_id == student_id)
    }

    /// Appends a new record.
    ///
    /// # Errors
    /// - `DuplicateId` when the candidate's id is already taken; the
    ///   roster is left unchanged.
    /// - `Validation` when the candidate fails record validation.
    pub fn create(&mut self, candidate: StudentRecord) -> StoreResult<()> {
        candidate.validate()?;
        if self.find(&candidate.student_id).is_some() {
            return Err(StoreError::DuplicateId(candidate.student_id));
        }

        let id = candidate.student_id.clone();
        self.records.push(candidate);
        if let Err(err) = self.repo.save(&self.records) {
            self.records.pop();
            return Err(err.into());
        }

        info!("event=roster_create module=store status=ok student_id={id}");
        Ok(())
    }

    /// Replaces the record identified by `original_id` in place.
    ///
    /// The candidate may carry a new id; renaming onto an id owned by a
    /// different record is rejected.
    ///
    /// # Errors
    /// - `NotFound` when `original_id` matches no record.
    /// - `DuplicateId` when the candidate id collides with another record.
    /// - `Validation` when the candidate fails record validation.
    pub fn update(&mut self, original_id: &str, candidate: StudentRecord) -> StoreResult<()> {
        candidate.validate()?;
        let position = self
            .records
            .iter()
            .position(|record| record.student_id == original_id)
            .ok_or_else(|| StoreError::NotFound(original_id.to_string()))?;

        if candidate.student_id != original_id && self.find(&candidate.student_id).is_some() {
            return Err(StoreError::DuplicateId(candidate.student_id));
        }

        let previous = std::mem::replace(&mut self.records[position], candidate);
        if let Err(err) = self.repo.save(&self.records) {
            self.records[position] = previous;
            return Err(err.into());
        }

        info!(
            "event=roster_update module=store status=ok student_id={} new_id={}",
            original_id, self.records[position].student_id
        );
        Ok(())
    }

    /// Removes the record with the given id. Irreversible.
    ///
    /// # Errors
    /// - `NotFound` when the id matches no record; the roster is left
    ///   unchanged.
    pub fn delete(&mut self, student_id: &str) -> StoreResult<()> {
        let position = self
            .records
            .iter()
            .position(|record| record.student_id == student_id)
            .ok_or_else(|| StoreError::NotFound(student_id.to_string()))?;

        let removed = self.records.remove(position);
        if let Err(err) = self.repo.save(&self.records) {
            self.records.insert(position, removed);
            return Err(err.into());
        }

        info!("event=roster_delete module=store status=ok student_id={student_id}");
        Ok(())
    }

    /// Discards all persisted data and restores the seed set. Destructive.
    pub fn reset_to_seed(&mut self) -> StoreResult<&[StudentRecord]> {
        self.repo.clear()?;
        self.records = self.seed.clone();
        self.repo.save(&self.records)?;
        info!(
            "event=roster_reset module=store status=ok count={}",
            self.records.len()
        );
        Ok(&self.records)
    }

    /// Serializes the full roster as a standalone pretty-printed JSON
    /// document, in the same wire shape as the persisted blob.
    pub fn export_json(&self) -> StoreResult<String> {
        let json = serde_json::to_string_pretty(&self.records).map_err(RepoError::Encode)?;
        Ok(json)
    }
}
