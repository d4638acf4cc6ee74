//! Canonical domain model for the student roster.
//!
//! # Responsibility
//! - Define the record shape shared by the store, query engine and views.
//! - Keep the wire contract (camelCase fields, score-as-number-or-empty)
//!   in one place.
//!
//! # Invariants
//! - A record is identified by its `studentId` value, nothing else.
//! - A present score is always clamped into [0, 100].

pub mod student;
