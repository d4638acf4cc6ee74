//! Score and course display projections.
//!
//! # Responsibility
//! - Format course id lists through the catalog.
//! - Classify scores into badge tiers and bar widths.
//!
//! # Invariants
//! - Tier boundaries: `high` at score >= 85, `low` below 70, `mid`
//!   between, `none` for ungraded.
//! - An ungraded record renders as a 0-width bar without ever being
//!   conflated with a real score of zero.

use crate::model::student::Score;
use crate::view::catalog::CourseCatalog;
use serde::Serialize;

/// Placeholder shown where no score exists.
const NO_SCORE_LABEL: &str = "—";

const HIGH_THRESHOLD: f64 = 85.0;
const LOW_THRESHOLD: f64 = 70.0;

/// Badge classification for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    High,
    Mid,
    Low,
    None,
}

/// Display-ready score badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBadge {
    pub label: String,
    pub tier: ScoreTier,
}

/// Maps course ids to titles, falling back to the raw id for unknown
/// entries, joined with `", "`.
pub fn format_course_list(ids: &[String], catalog: &CourseCatalog) -> String {
    ids.iter()
        .map(|id| catalog.title_for(id).unwrap_or(id).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Classifies a score into its badge.
pub fn score_badge(score: Score) -> ScoreBadge {
    match score.value() {
        None => ScoreBadge {
            label: NO_SCORE_LABEL.to_string(),
            tier: ScoreTier::None,
        },
        Some(value) => {
            let tier = if value >= HIGH_THRESHOLD {
                ScoreTier::High
            } else if value < LOW_THRESHOLD {
                ScoreTier::Low
            } else {
                ScoreTier::Mid
            };
            ScoreBadge {
                label: score.text(),
                tier,
            }
        }
    }
}

/// Bar width for a score, in whole percent.
///
/// Ungraded maps to 0 for width purposes only.
pub fn progress_percent(score: Score) -> u8 {
    match score.value() {
        None => 0,
        Some(value) => value.round().clamp(0.0, 100.0) as u8,
    }
}
