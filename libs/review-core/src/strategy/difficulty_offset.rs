//! Difficulty-keyed flat offsets.

use super::SchedulingStrategy;
use crate::types::{Difficulty, Note};
use chrono::{DateTime, Duration, Utc};

/// Day offset for a rating.
pub fn offset_days(difficulty: Difficulty) -> i64 {
    match difficulty {
        Difficulty::Easy => 7,
        Difficulty::Medium => 3,
        Difficulty::Hard => 1,
    }
}

/// Next review date from a rating and a reference instant.
///
/// Dates carry calendar-day granularity only: the reference is truncated to
/// midnight before the offset is added, so sessions held at different times
/// of day land the same note on the same due date.
pub fn compute_next_review_date(
    difficulty: Difficulty,
    reference: DateTime<Utc>,
) -> DateTime<Utc> {
    let midnight = reference
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc();
    midnight + Duration::days(offset_days(difficulty))
}

/// Flat offset keyed to the rating, applied at the point of review.
#[derive(Debug, Clone, Copy, Default)]
pub struct DifficultyOffset;

impl SchedulingStrategy for DifficultyOffset {
    fn name(&self) -> &'static str {
        "difficulty_offset"
    }

    fn next_review_date(
        &self,
        _note: &Note,
        difficulty: Difficulty,
        now: DateTime<Utc>,
    ) -> DateTime<Utc> {
        compute_next_review_date(difficulty, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn offsets_are_seven_three_one() {
        assert_eq!(offset_days(Difficulty::Easy), 7);
        assert_eq!(offset_days(Difficulty::Medium), 3);
        assert_eq!(offset_days(Difficulty::Hard), 1);
    }

    #[test]
    fn offset_is_exact_in_calendar_days() {
        let reference = Utc.with_ymd_and_hms(2026, 2, 10, 9, 15, 30).unwrap();

        for (difficulty, days) in [
            (Difficulty::Easy, 7),
            (Difficulty::Medium, 3),
            (Difficulty::Hard, 1),
        ] {
            let next = compute_next_review_date(difficulty, reference);
            let gap = next.date_naive() - reference.date_naive();
            assert_eq!(gap, Duration::days(days));
        }
    }

    #[test]
    fn time_of_day_never_drifts_the_schedule() {
        let morning = Utc.with_ymd_and_hms(2026, 2, 10, 6, 0, 0).unwrap();
        let night = Utc.with_ymd_and_hms(2026, 2, 10, 23, 59, 59).unwrap();

        assert_eq!(
            compute_next_review_date(Difficulty::Medium, morning),
            compute_next_review_date(Difficulty::Medium, night)
        );
    }

    #[test]
    fn result_lands_on_midnight() {
        let reference = Utc.with_ymd_and_hms(2026, 2, 10, 17, 42, 11).unwrap();
        let next = compute_next_review_date(Difficulty::Easy, reference);

        assert_eq!(next.hour(), 0);
        assert_eq!(next.minute(), 0);
        assert_eq!(next.second(), 0);
    }
}
