//! Review session endpoints

use axum::{extract::State, Json};
use chrono::Utc;

use review_core::{select_due_notes, Difficulty, ReviewSession};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/review/queue
pub async fn queue(State(state): State<AppState>) -> Result<Json<ReviewQueueResponse>> {
    // One canonical instant for the whole selection keeps it deterministic.
    let now = Utc::now();
    let due_notes = select_due_notes(&state.store.all(), now);

    Ok(Json(ReviewQueueResponse {
        due_count: due_notes.len(),
        due_notes,
    }))
}

/// POST /api/review/session
///
/// Starts a fresh session over the current due set, replacing any previous
/// one. An empty due set yields a session already in `nothing_due`.
pub async fn start_session(State(state): State<AppState>) -> Result<Json<SessionSnapshot>> {
    let now = Utc::now();
    let due = select_due_notes(&state.store.all(), now);
    let session = ReviewSession::new(due, state.config.strategy());
    let snapshot = SessionSnapshot::from_session(&session);

    *state.session.lock().expect("session lock") = Some(session);
    Ok(Json(snapshot))
}

/// GET /api/review/session
pub async fn session_state(State(state): State<AppState>) -> Result<Json<SessionSnapshot>> {
    let guard = state.session.lock().expect("session lock");
    let session = guard
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("no active review session".to_string()))?;

    Ok(Json(SessionSnapshot::from_session(session)))
}

/// POST /api/review/session/rating
pub async fn submit_rating(
    State(state): State<AppState>,
    Json(request): Json<SubmitRatingRequest>,
) -> Result<Json<SubmitRatingResponse>> {
    let difficulty: Difficulty = request.difficulty.parse()?;

    let mut guard = state.session.lock().expect("session lock");
    let session = guard
        .as_mut()
        .ok_or_else(|| ApiError::NotFound("no active review session".to_string()))?;

    let now = Utc::now();
    let updated = session.record_rating(difficulty, now)?;

    // Persist while the session lock is held so an abandoned session never
    // loses a recorded rating.
    if !state.store.update_note(&updated) {
        return Err(ApiError::Internal(format!(
            "rated note {} missing from store",
            updated.id
        )));
    }

    Ok(Json(SubmitRatingResponse {
        updated_note: updated,
        session: SessionSnapshot::from_session(session),
    }))
}

/// POST /api/review/session/advance
pub async fn advance(State(state): State<AppState>) -> Result<Json<SessionSnapshot>> {
    let mut guard = state.session.lock().expect("session lock");
    let session = guard
        .as_mut()
        .ok_or_else(|| ApiError::NotFound("no active review session".to_string()))?;

    session.advance()?;
    Ok(Json(SessionSnapshot::from_session(session)))
}
