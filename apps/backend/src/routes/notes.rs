//! Note endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use review_core::review_status;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/notes
pub async fn list(State(state): State<AppState>) -> Result<Json<NoteListResponse>> {
    let now = Utc::now();
    let notes = state
        .store
        .all()
        .into_iter()
        .map(|note| {
            let status = review_status(&note, now);
            NoteWithStatus { note, status }
        })
        .collect();

    Ok(Json(NoteListResponse { notes }))
}

/// POST /api/notes
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateNoteRequest>,
) -> Result<Json<Note>> {
    if request.title.trim().is_empty() {
        return Err(ApiError::BadRequest("title must not be empty".to_string()));
    }

    let mut note = Note::new(request.title, request.transcript, Utc::now());
    note.subject = request.subject;
    if let Some(duration) = request.duration_secs {
        note.duration_secs = duration;
    }
    if let Some(score) = request.completeness_score {
        note.completeness_score = score.min(100);
    }
    if let Some(points) = request.key_points {
        note.key_points = points;
    }

    state.store.insert(note.clone());
    Ok(Json(note))
}

/// GET /api/notes/{id}
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NoteWithStatus>> {
    let note = state
        .store
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("note {id}")))?;
    let status = review_status(&note, Utc::now());

    Ok(Json(NoteWithStatus { note, status }))
}

/// PUT /api/notes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateNoteRequest>,
) -> Result<Json<Note>> {
    let mut note = state
        .store
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("note {id}")))?;

    if let Some(title) = request.title {
        note.title = title;
    }
    if let Some(transcript) = request.transcript {
        note.transcript = transcript;
    }
    if let Some(subject) = request.subject {
        note.subject = Some(subject);
    }
    if let Some(score) = request.completeness_score {
        note.completeness_score = score.min(100);
    }
    if let Some(points) = request.key_points {
        note.key_points = points;
    }
    if let Some(is_complete) = request.is_complete {
        note.is_complete = is_complete;
    }

    if !state.store.update_note(&note) {
        return Err(ApiError::NotFound(format!("note {id}")));
    }
    Ok(Json(note))
}

/// POST /api/notes/{id}/complete
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NoteWithStatus>> {
    let mut note = state
        .store
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("note {id}")))?;
    note.is_complete = true;

    if !state.store.update_note(&note) {
        return Err(ApiError::NotFound(format!("note {id}")));
    }
    let status = review_status(&note, Utc::now());
    Ok(Json(NoteWithStatus { note, status }))
}

/// DELETE /api/notes/{id}
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Note>> {
    state
        .store
        .remove(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("note {id}")))
}
