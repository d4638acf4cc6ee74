//! Persistence layer abstractions and implementations.
//!
//! # Responsibility
//! - Define the roster persistence contract used by the store.
//! - Isolate storage details from business orchestration.
//!
//! # Invariants
//! - The roster is persisted as one whole blob; there are no partial or
//!   incremental writes.
//! - Absent or malformed persisted data degrades to an empty roster
//!   instead of failing the caller.

pub mod roster_repo;
