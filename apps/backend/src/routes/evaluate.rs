//! Spoken-answer evaluation endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::EvaluateRequest;
use crate::services::evaluator::Evaluation;
use crate::AppState;

/// POST /api/notes/{id}/evaluate
pub async fn evaluate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<Evaluation>> {
    if !state.config.ai.ai_prompts_enabled {
        return Err(ApiError::BadRequest(
            "AI evaluation is disabled".to_string(),
        ));
    }

    let note = state
        .store
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("note {id}")))?;

    let evaluation = state.evaluator.evaluate(&note, &request.spoken_answer);
    Ok(Json(evaluation))
}
