//! Test fixtures and factory functions for creating test data.

use chrono::{Duration, Utc};
use review_core::Note;
use serde_json::json;

/// Create a note whose scheduled review date passed `days_ago` days ago.
pub fn overdue_note(title: &str, days_ago: i64) -> Note {
    let now = Utc::now();
    let mut note = Note::new(
        title,
        format!("{title} transcript"),
        now - Duration::days(days_ago + 1),
    );
    note.next_review_date = Some(now - Duration::days(days_ago));
    note.review_count = 1;
    note.last_review_date = Some(now - Duration::days(days_ago + 1));
    note
}

/// Create a note that has never been scheduled (due since creation).
pub fn fresh_note(title: &str) -> Note {
    Note::new(
        title,
        format!("{title} transcript"),
        Utc::now() - Duration::hours(2),
    )
}

/// Create a note scheduled `days_ahead` days in the future.
pub fn future_note(title: &str, days_ahead: i64) -> Note {
    let now = Utc::now();
    let mut note = Note::new(title, format!("{title} transcript"), now - Duration::days(1));
    note.next_review_date = Some(now + Duration::days(days_ahead));
    note
}

/// Create a completed note with an overdue date, which must never surface.
pub fn complete_note(title: &str) -> Note {
    let now = Utc::now();
    let mut note = Note::new(title, format!("{title} transcript"), now - Duration::days(5));
    note.next_review_date = Some(now - Duration::days(2));
    note.is_complete = true;
    note
}

/// Create-note request body.
pub fn create_note_request(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "transcript": format!("{title} transcript"),
        "subject": "Biology"
    })
}

/// Rating request body.
pub fn rating_request(difficulty: &str) -> serde_json::Value {
    json!({ "difficulty": difficulty })
}

/// Evaluate request body.
pub fn evaluate_request(spoken_answer: &str) -> serde_json::Value {
    json!({ "spoken_answer": spoken_answer })
}
