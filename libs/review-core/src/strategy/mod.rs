//! Scheduling strategy implementations.
//!
//! The app historically carried two interval policies that never agreed: a
//! six-step day sequence indexed by completed review count, and a flat day
//! offset keyed to the difficulty rating. Both are kept here as named
//! strategies behind one trait; the caller picks one by name and the choice
//! is surfaced in configuration rather than silently merged.

pub mod count_progression;
pub mod difficulty_offset;

use crate::types::{Difficulty, Note};
use chrono::{DateTime, Utc};

pub use count_progression::{next_interval_days, CountProgression, SRS_INTERVALS};
pub use difficulty_offset::{compute_next_review_date, offset_days, DifficultyOffset};

/// Trait for review scheduling strategies.
pub trait SchedulingStrategy: Send + Sync {
    /// Strategy identifier.
    fn name(&self) -> &'static str;

    /// Compute the next review date for a note rated at `difficulty`.
    ///
    /// Called with the note's state as of the review being completed; the
    /// review count has not been incremented yet.
    fn next_review_date(
        &self,
        note: &Note,
        difficulty: Difficulty,
        now: DateTime<Utc>,
    ) -> DateTime<Utc>;
}

/// Get strategy by name.
pub fn get_strategy(name: &str) -> Option<Box<dyn SchedulingStrategy>> {
    match name {
        "count_progression" => Some(Box::new(CountProgression)),
        "difficulty_offset" => Some(Box::new(DifficultyOffset)),
        _ => None,
    }
}
