//! Settings endpoint

use axum::{extract::State, Json};

use crate::models::*;
use crate::AppState;

/// GET /api/settings
pub async fn get_all(State(state): State<AppState>) -> Json<SettingsResponse> {
    Json(SettingsResponse {
        settings: EffectiveSettings::merge(&state.settings, None),
    })
}
