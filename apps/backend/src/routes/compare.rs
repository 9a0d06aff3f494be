//! Single-word comparison endpoint

use axum::{extract::State, Json};
use steno_core::{tokenize_words, Normalizer};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/compare
pub async fn compare(
    State(state): State<AppState>,
    Json(payload): Json<CompareRequest>,
) -> Result<Json<CompareResponse>> {
    let master = single_word("master", &payload.master)?;
    let typed = single_word("typed", &payload.typed)?;

    let settings = EffectiveSettings::merge(&state.settings, payload.overrides.as_ref());
    let normalizer = Normalizer::from_config(&settings.equivalence);

    Ok(Json(CompareResponse {
        word_match: normalizer.compare(&master, &typed),
        is_match: steno_core::equal(&master, &typed, &settings.equivalence),
        master_canonical: normalizer.canonicalize(&master),
        typed_canonical: normalizer.canonicalize(&typed),
    }))
}

/// Tokenize the field the way /api/analyze does and require exactly one word.
fn single_word(field: &str, value: &str) -> Result<String> {
    let mut words = tokenize_words(value).into_iter();
    match (words.next(), words.next()) {
        (Some(word), None) => Ok(word),
        (None, _) => Err(ApiError::BadRequest(format!("{} word is required", field))),
        (Some(_), Some(_)) => Err(ApiError::BadRequest(format!(
            "{} must be a single word",
            field
        ))),
    }
}
