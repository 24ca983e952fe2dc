//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from review-core
pub use review_core::{Difficulty, Note, ReviewSession, ReviewStatus, SessionState};

/// Note enriched with its badge status for display.
#[derive(Debug, Clone, Serialize)]
pub struct NoteWithStatus {
    #[serde(flatten)]
    pub note: Note,
    pub status: ReviewStatus,
}

/// GET /api/notes response body.
#[derive(Debug, Serialize)]
pub struct NoteListResponse {
    pub notes: Vec<NoteWithStatus>,
}

/// POST /api/notes request body.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub transcript: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub duration_secs: Option<f64>,
    #[serde(default)]
    pub completeness_score: Option<u8>,
    #[serde(default)]
    pub key_points: Option<Vec<String>>,
}

/// PUT /api/notes/{id} request body; absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub completeness_score: Option<u8>,
    #[serde(default)]
    pub key_points: Option<Vec<String>>,
    #[serde(default)]
    pub is_complete: Option<bool>,
}

/// GET /api/review/queue response body.
#[derive(Debug, Serialize)]
pub struct ReviewQueueResponse {
    pub due_count: usize,
    pub due_notes: Vec<Note>,
}

/// POST /api/review/session/rating request body.
#[derive(Debug, Deserialize)]
pub struct SubmitRatingRequest {
    pub difficulty: String,
}

/// POST /api/review/session/rating response body.
#[derive(Debug, Serialize)]
pub struct SubmitRatingResponse {
    pub updated_note: Note,
    pub session: SessionSnapshot,
}

/// Serializable view of the live review session.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub strategy: String,
    pub total: usize,
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_note: Option<Note>,
}

impl SessionSnapshot {
    pub fn from_session(session: &ReviewSession) -> Self {
        Self {
            state: session.state(),
            strategy: session.strategy_name().to_string(),
            total: session.total(),
            position: session.position(),
            current_note: session.current_note().cloned(),
        }
    }
}

/// GET /api/stats response body.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_notes: usize,
    pub complete: usize,
    pub urgent: usize,
    pub building: usize,
    pub due_now: usize,
}

/// POST /api/notes/{id}/evaluate request body.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub spoken_answer: String,
}
