//! Display-contract projections.
//!
//! # Responsibility
//! - Turn roster data into display-ready structures without touching any
//!   rendering layer.
//!
//! # Invariants
//! - Badge thresholds and the ungraded placeholder are part of the data
//!   contract consumers rely on, not cosmetics.

pub mod catalog;
pub mod projections;
