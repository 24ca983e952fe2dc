//! Due-set selection and review status classification.

use crate::types::{Note, ReviewStatus};
use chrono::{DateTime, Utc};

/// Select the notes due for review as of a reference instant.
///
/// Completed notes are never due. A note with no explicit schedule is due
/// from its creation date. The input order is preserved; no urgency re-sort
/// happens here.
pub fn select_due_notes(notes: &[Note], as_of: DateTime<Utc>) -> Vec<Note> {
    notes
        .iter()
        .filter(|note| !note.is_complete && note.effective_due_date() <= as_of)
        .cloned()
        .collect()
}

/// Whether an explicitly scheduled review date has passed.
///
/// An absent date is not due under this predicate. This is the badge path:
/// it asks "is this specific date overdue", while [`select_due_notes`]
/// separately treats a never-scheduled note as eligible from creation. The
/// asymmetry is deliberate.
pub fn is_review_due(next_review_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match next_review_date {
        Some(due) => due <= now,
        None => false,
    }
}

/// Classify a note for badge display.
pub fn review_status(note: &Note, now: DateTime<Utc>) -> ReviewStatus {
    if note.is_complete {
        ReviewStatus::Complete
    } else if is_review_due(note.next_review_date, now) {
        ReviewStatus::Urgent
    } else {
        ReviewStatus::Building
    }
}
