//! Review session sequencing.

use crate::error::{Result, SchedulerError};
use crate::strategy::SchedulingStrategy;
use crate::types::{Difficulty, Note};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session lifecycle state.
///
/// `Exhausted` and `NothingDue` are terminal; a new session must be built
/// to review again. `NothingDue` means no review happened at all, which the
/// caller presents differently from finishing a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    InProgress,
    Exhausted,
    NothingDue,
}

impl SessionState {
    /// Get the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Exhausted => "exhausted",
            Self::NothingDue => "nothing_due",
        }
    }
}

/// One pass through the current due set, rating each note once.
///
/// The session is ephemeral and holds no durable state; the review fields
/// written back to each note are the only thing that survives it. One
/// caller drives one session at a time.
pub struct ReviewSession {
    queue: Vec<Note>,
    cursor: usize,
    state: SessionState,
    strategy: Box<dyn SchedulingStrategy>,
}

impl ReviewSession {
    /// Start a session over a due set.
    ///
    /// A non-empty set begins `InProgress`; an empty set lands directly in
    /// `NothingDue`.
    pub fn new(due_notes: Vec<Note>, strategy: Box<dyn SchedulingStrategy>) -> Self {
        let state = if due_notes.is_empty() {
            SessionState::NothingDue
        } else {
            SessionState::InProgress
        };
        Self {
            queue: due_notes,
            cursor: 0,
            state,
            strategy,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Name of the scheduling strategy driving this session.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Peek at the note under the cursor.
    pub fn current_note(&self) -> Option<&Note> {
        if self.state != SessionState::InProgress {
            return None;
        }
        self.queue.get(self.cursor)
    }

    /// Whether another note follows the current one.
    pub fn has_next(&self) -> bool {
        self.state == SessionState::InProgress && self.cursor + 1 < self.queue.len()
    }

    /// Number of notes the session started with.
    pub fn total(&self) -> usize {
        self.queue.len()
    }

    /// Zero-based index of the cursor.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Apply a rating to the current note and advance the cursor.
    ///
    /// Returns the updated note: review count incremented by one,
    /// `last_review_date` set to `now`, `next_review_date` produced by the
    /// session's strategy. The caller persists the returned note. In a
    /// terminal state this fails with `InvalidState` and nothing changes.
    pub fn record_rating(&mut self, difficulty: Difficulty, now: DateTime<Utc>) -> Result<Note> {
        let current = self.current_note().cloned().ok_or_else(|| {
            SchedulerError::InvalidState {
                reason: format!("cannot rate a {} session", self.state.as_str()),
            }
        })?;

        let mut updated = current;
        // Strategy sees the pre-increment count.
        updated.next_review_date = Some(self.strategy.next_review_date(&updated, difficulty, now));
        updated.last_review_date = Some(now);
        updated.review_count += 1;

        self.queue[self.cursor] = updated.clone();
        self.step();
        Ok(updated)
    }

    /// Skip the current note without rating it.
    pub fn advance(&mut self) -> Result<()> {
        if self.current_note().is_none() {
            return Err(SchedulerError::InvalidState {
                reason: format!("cannot advance a {} session", self.state.as_str()),
            });
        }
        self.step();
        Ok(())
    }

    fn step(&mut self) {
        self.cursor += 1;
        if self.cursor >= self.queue.len() {
            self.state = SessionState::Exhausted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{get_strategy, CountProgression};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 2, 16, 20, 0).unwrap()
    }

    fn midnight() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 2, 0, 0, 0).unwrap()
    }

    fn due_notes(titles: &[&str]) -> Vec<Note> {
        titles
            .iter()
            .map(|t| Note::new(*t, format!("{t} transcript"), now() - Duration::days(3)))
            .collect()
    }

    fn offset_session(notes: Vec<Note>) -> ReviewSession {
        ReviewSession::new(notes, get_strategy("difficulty_offset").unwrap())
    }

    #[test]
    fn empty_due_set_starts_nothing_due() {
        let session = offset_session(vec![]);
        assert_eq!(session.state(), SessionState::NothingDue);
        assert!(session.current_note().is_none());
        assert!(!session.has_next());
    }

    #[test]
    fn full_pass_with_mixed_ratings() {
        let notes = due_notes(&["A", "B", "C"]);
        let ids: Vec<_> = notes.iter().map(|n| n.id).collect();
        let mut session = offset_session(notes);

        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.current_note().unwrap().id, ids[0]);

        let a = session.record_rating(Difficulty::Easy, now()).unwrap();
        assert_eq!(session.state(), SessionState::InProgress);
        let b = session.record_rating(Difficulty::Hard, now()).unwrap();
        assert_eq!(session.state(), SessionState::InProgress);
        let c = session.record_rating(Difficulty::Medium, now()).unwrap();
        assert_eq!(session.state(), SessionState::Exhausted);

        assert_eq!(a.next_review_date, Some(midnight() + Duration::days(7)));
        assert_eq!(b.next_review_date, Some(midnight() + Duration::days(1)));
        assert_eq!(c.next_review_date, Some(midnight() + Duration::days(3)));

        for updated in [&a, &b, &c] {
            assert_eq!(updated.review_count, 1);
            assert_eq!(updated.last_review_date, Some(now()));
        }
    }

    #[test]
    fn rating_after_exhaustion_is_rejected() {
        let mut session = offset_session(due_notes(&["only"]));
        session.record_rating(Difficulty::Medium, now()).unwrap();
        assert_eq!(session.state(), SessionState::Exhausted);

        let err = session.record_rating(Difficulty::Easy, now()).unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidState { .. }));
        assert_eq!(session.state(), SessionState::Exhausted);
    }

    #[test]
    fn rating_a_nothing_due_session_is_rejected() {
        let mut session = offset_session(vec![]);
        let err = session.record_rating(Difficulty::Easy, now()).unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidState { .. }));
        assert_eq!(session.state(), SessionState::NothingDue);
    }

    #[test]
    fn advance_skips_without_mutating() {
        let notes = due_notes(&["skip me", "rate me"]);
        let skipped_id = notes[0].id;
        let mut session = offset_session(notes);

        session.advance().unwrap();
        let current = session.current_note().unwrap();
        assert_ne!(current.id, skipped_id);

        session.record_rating(Difficulty::Medium, now()).unwrap();
        assert_eq!(session.state(), SessionState::Exhausted);
        assert!(session.advance().is_err());
    }

    #[test]
    fn has_next_tracks_the_queue() {
        let mut session = offset_session(due_notes(&["one", "two"]));
        assert!(session.has_next());
        session.record_rating(Difficulty::Hard, now()).unwrap();
        assert!(!session.has_next());
    }

    #[test]
    fn count_progression_uses_pre_increment_count() {
        let mut note = Note::new("walked", "transcript", now() - Duration::days(30));
        note.review_count = 1;

        let mut session = ReviewSession::new(vec![note], Box::new(CountProgression));
        let updated = session.record_rating(Difficulty::Hard, now()).unwrap();

        // Count 1 indexes the 3-day step; the rating is irrelevant here.
        assert_eq!(updated.next_review_date, Some(now() + Duration::days(3)));
        assert_eq!(updated.review_count, 2);
    }
}
