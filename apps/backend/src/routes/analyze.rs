//! Analysis endpoint

use axum::{extract::State, Json};
use chrono::Utc;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/analyze
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>> {
    if payload.master_text.trim().is_empty() {
        return Err(ApiError::BadRequest("master text is required".to_string()));
    }
    if payload.typed_text.trim().is_empty() {
        return Err(ApiError::BadRequest("typed text is required".to_string()));
    }

    let settings = EffectiveSettings::merge(&state.settings, payload.overrides.as_ref());
    let AnalyzeRequest {
        master_text,
        typed_text,
        ..
    } = payload;

    // Alignment is O(master * typed); keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || {
        steno_core::analyze(&master_text, &typed_text, &settings)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("analysis task failed: {}", e)))??;

    tracing::info!(
        master_words = result.stats.total_master_words,
        typed_words = result.stats.total_typed_words,
        full = result.stats.full_mistakes,
        half = result.stats.half_mistakes,
        marks = result.stats.marks,
        "analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        results: result.results,
        stats: result.stats,
        settings,
        analyzed_at: Utc::now(),
    }))
}
