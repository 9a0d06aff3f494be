//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export shared types from steno-core
pub use steno_core::types::{AnalysisOverrides, AnalysisStats, EffectiveSettings, Outcome};
pub use steno_core::WordMatch;

/// POST /api/analyze request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub master_text: String,
    pub typed_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<AnalysisOverrides>,
}

/// POST /api/analyze response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub results: Vec<Outcome>,
    pub stats: AnalysisStats,
    pub settings: EffectiveSettings,
    pub analyzed_at: DateTime<Utc>,
}

/// POST /api/compare request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub master: String,
    pub typed: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<AnalysisOverrides>,
}

/// POST /api/compare response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    /// Relation between the canonical forms. Computed whether or not
    /// equivalence is enabled, so it may read `equivalent` while `is_match`
    /// is false.
    pub word_match: WordMatch,
    /// Whether the words count as equal under the effective settings.
    pub is_match: bool,
    pub master_canonical: String,
    pub typed_canonical: String,
}

/// GET /api/settings response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub settings: EffectiveSettings,
}
