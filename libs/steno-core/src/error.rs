//! Error types for steno-core.

use thiserror::Error;

/// Result type alias using AnalysisError.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Which of the two compared texts an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSide {
    Master,
    Typed,
}

impl std::fmt::Display for TextSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Master => f.write_str("master"),
            Self::Typed => f.write_str("typed"),
        }
    }
}

/// Errors that can occur before the engine starts aligning.
///
/// Alignment, classification and scoring themselves are total; these only
/// cover caller-imposed limits and configuration parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("{side} text has {count} tokens, limit is {limit}")]
    TooManyTokens {
        side: TextSide,
        count: usize,
        limit: usize,
    },

    #[error("unknown {kind} value: {value}")]
    UnknownSetting { kind: &'static str, value: String },
}
