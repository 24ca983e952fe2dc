//! Aggregate stats endpoint

use axum::{extract::State, Json};
use chrono::Utc;

use review_core::{review_status, select_due_notes, ReviewStatus};

use crate::error::Result;
use crate::models::StatsResponse;
use crate::AppState;

/// GET /api/stats
pub async fn overview(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let now = Utc::now();
    let notes = state.store.all();

    let mut complete = 0;
    let mut urgent = 0;
    let mut building = 0;
    for note in &notes {
        match review_status(note, now) {
            ReviewStatus::Complete => complete += 1,
            ReviewStatus::Urgent => urgent += 1,
            ReviewStatus::Building => building += 1,
        }
    }

    Ok(Json(StatsResponse {
        total_notes: notes.len(),
        complete,
        urgent,
        building,
        due_now: select_due_notes(&notes, now).len(),
    }))
}
