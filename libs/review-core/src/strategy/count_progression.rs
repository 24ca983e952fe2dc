//! Review-count interval progression.

use super::SchedulingStrategy;
use crate::types::{Difficulty, Note};
use chrono::{DateTime, Duration, Utc};

/// Fixed ascending review intervals, in days.
pub const SRS_INTERVALS: [i64; 6] = [1, 3, 7, 14, 30, 90];

/// Days until the next review after `review_count` completed reviews.
///
/// Progression walks the sequence as the count grows and clamps at the
/// final 90-day step once the count meets or exceeds the sequence length.
pub fn next_interval_days(review_count: u32) -> i64 {
    let index = (review_count as usize).min(SRS_INTERVALS.len() - 1);
    SRS_INTERVALS[index]
}

/// Interval progression indexed by completed review count.
///
/// The rating has no effect on spacing under this policy; every completed
/// review advances one step regardless of how hard recall felt.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountProgression;

impl SchedulingStrategy for CountProgression {
    fn name(&self) -> &'static str {
        "count_progression"
    }

    fn next_review_date(
        &self,
        note: &Note,
        _difficulty: Difficulty,
        now: DateTime<Utc>,
    ) -> DateTime<Utc> {
        now + Duration::days(next_interval_days(note.review_count))
    }
}
