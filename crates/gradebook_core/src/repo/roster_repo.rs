//! Roster persistence contract and SQLite key-value implementation.
//!
//! # Responsibility
//! - Read and write the roster as a single JSON-encoded blob.
//! - Keep the wire shape of the blob identical to the export format.
//!
//! # Invariants
//! - `save` overwrites the whole blob; last writer wins.
//! - `load` never fails on missing or corrupt data; it yields an empty
//!   roster and logs the recovery.

use crate::db::DbError;
use crate::model::student::StudentRecord;
use log::warn;
use rusqlite::{Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key owning the serialized roster blob.
pub const ROSTER_STORAGE_KEY: &str = "gradebook_students_v1";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for roster blob storage.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode roster blob: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Persistence contract for the roster blob.
pub trait RosterRepository {
    fn load(&self) -> RepoResult<Vec<StudentRecord>>;
    fn save(&self, records: &[StudentRecord]) -> RepoResult<()>;
    fn clear(&self) -> RepoResult<()>;
}

/// SQLite-backed roster repository storing the blob in `kv_store`.
pub struct SqliteRosterRepository<'conn> {
    conn: &'conn Connection,
    key: &'static str,
}

impl<'conn> SqliteRosterRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            key: ROSTER_STORAGE_KEY,
        }
    }
}

impl RosterRepository for SqliteRosterRepository<'_> {
    fn load(&self) -> RepoResult<Vec<StudentRecord>> {
        let blob: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1;", [self.key], |row| {
                row.get(0)
            })
            .optional()?;

        let Some(blob) = blob else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<StudentRecord>>(&blob) {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!(
                    "event=roster_load module=repo status=recovered key={} error={err}",
                    self.key
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, records: &[StudentRecord]) -> RepoResult<()> {
        let blob = serde_json::to_string(records)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            (self.key, blob.as_str()),
        )?;
        Ok(())
    }

    fn clear(&self) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [self.key])?;
        Ok(())
    }
}
