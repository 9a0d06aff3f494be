//! Core types for the marking engine.

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

/// Penalty weight of a non-matching outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weight {
    /// A real word-level error.
    Full,
    /// A difference in soft punctuation only.
    Half,
}

impl Weight {
    /// Penalty contributed to the total.
    pub fn penalty(self) -> f64 {
        match self {
            Self::Full => 1.0,
            Self::Half => 0.5,
        }
    }
}

/// One aligned position of the merged master/typed sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    /// Typed token matches the master token, exactly or under equivalence.
    Correct { typed: String, correct: String },
    /// Typed and master tokens are aligned as a pair but differ.
    Substitution {
        typed: String,
        correct: String,
        weight: Weight,
    },
    /// Master token with no typed counterpart.
    Missing { correct: String, weight: Weight },
    /// Typed token with no master counterpart.
    Extra { typed: String, weight: Weight },
}

impl Outcome {
    /// Weight of the outcome, `None` for a correct token.
    pub fn weight(&self) -> Option<Weight> {
        match self {
            Self::Correct { .. } => None,
            Self::Substitution { weight, .. }
            | Self::Missing { weight, .. }
            | Self::Extra { weight, .. } => Some(*weight),
        }
    }

    /// Penalty contributed by this outcome (0, 0.5 or 1.0).
    pub fn penalty(&self) -> f64 {
        self.weight().map_or(0.0, Weight::penalty)
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    /// The typed-side token, if this position has one.
    pub fn typed(&self) -> Option<&str> {
        match self {
            Self::Correct { typed, .. }
            | Self::Substitution { typed, .. }
            | Self::Extra { typed, .. } => Some(typed),
            Self::Missing { .. } => None,
        }
    }

    /// The master-side token, if this position has one.
    pub fn correct(&self) -> Option<&str> {
        match self {
            Self::Correct { correct, .. }
            | Self::Substitution { correct, .. }
            | Self::Missing { correct, .. } => Some(correct),
            Self::Extra { .. } => None,
        }
    }

    /// Display kind used by result renderers.
    pub fn kind(&self) -> OutcomeKind {
        match (self, self.weight()) {
            (Self::Correct { .. }, _) => OutcomeKind::Correct,
            (_, Some(Weight::Half)) => OutcomeKind::HalfError,
            (Self::Substitution { .. }, _) => OutcomeKind::Error,
            (Self::Missing { .. }, _) => OutcomeKind::Missing,
            (Self::Extra { .. }, _) => OutcomeKind::Extra,
        }
    }
}

/// The five display kinds of an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Correct,
    Error,
    Missing,
    Extra,
    HalfError,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Error => "error",
            Self::Missing => "missing",
            Self::Extra => "extra",
            Self::HalfError => "half_error",
        }
    }
}

/// Aggregate statistics of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub total_master_words: usize,
    pub total_typed_words: usize,
    pub correct_words: usize,
    pub full_mistakes: usize,
    pub half_mistakes: usize,
    pub total_penalty: f64,
    /// Marks out of 100, rounded to 2 decimals.
    pub marks: f64,
    /// Accuracy percentage, rounded to 2 decimals.
    pub accuracy: f64,
}

impl Default for AnalysisStats {
    fn default() -> Self {
        Self {
            total_master_words: 0,
            total_typed_words: 0,
            correct_words: 0,
            full_mistakes: 0,
            half_mistakes: 0,
            total_penalty: 0.0,
            marks: 100.0,
            accuracy: 100.0,
        }
    }
}

/// Outcomes in reading order plus their statistics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub results: Vec<Outcome>,
    pub stats: AnalysisStats,
}

/// Whether script-aware equivalence participates in token comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EquivalenceConfig {
    /// When off, only exact string identity counts as a match.
    pub enabled: bool,
    /// Decompose Kruti Dev alt-code glyphs before the Unicode rules.
    #[serde(default)]
    pub legacy_glyphs: bool,
}

impl EquivalenceConfig {
    pub fn on() -> Self {
        Self {
            enabled: true,
            legacy_glyphs: false,
        }
    }

    pub fn off() -> Self {
        Self::default()
    }

    pub fn with_legacy_glyphs(mut self, legacy_glyphs: bool) -> Self {
        self.legacy_glyphs = legacy_glyphs;
        self
    }
}

/// How text is split into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizePolicy {
    /// Whitespace only; punctuation stays attached to its word.
    #[default]
    WholeWords,
    /// Sentence punctuation attached to a word becomes its own token.
    SplitPunctuation,
}

impl TokenizePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WholeWords => "whole_words",
            Self::SplitPunctuation => "split_punctuation",
        }
    }
}

impl std::str::FromStr for TokenizePolicy {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "whole_words" => Ok(Self::WholeWords),
            "split_punctuation" => Ok(Self::SplitPunctuation),
            other => Err(AnalysisError::UnknownSetting {
                kind: "tokenize policy",
                value: other.to_string(),
            }),
        }
    }
}

/// Process-wide engine settings, fixed at configuration time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisSettings {
    pub equivalence: EquivalenceConfig,
    pub tokenize_policy: TokenizePolicy,
    /// Reject texts that produce more tokens than this.
    pub max_tokens: Option<usize>,
}

/// Per-call overrides (all fields optional).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equivalence: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_glyphs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokenize_policy: Option<TokenizePolicy>,
}

/// Effective settings for one call (global merged with overrides).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveSettings {
    pub equivalence: EquivalenceConfig,
    pub tokenize_policy: TokenizePolicy,
    pub max_tokens: Option<usize>,
}

impl EffectiveSettings {
    /// Merge global settings with optional per-call overrides.
    ///
    /// The token cap is never overridable per call.
    pub fn merge(global: &AnalysisSettings, overrides: Option<&AnalysisOverrides>) -> Self {
        match overrides {
            Some(o) => Self {
                equivalence: EquivalenceConfig {
                    enabled: o.equivalence.unwrap_or(global.equivalence.enabled),
                    legacy_glyphs: o.legacy_glyphs.unwrap_or(global.equivalence.legacy_glyphs),
                },
                tokenize_policy: o.tokenize_policy.unwrap_or(global.tokenize_policy),
                max_tokens: global.max_tokens,
            },
            None => Self {
                equivalence: global.equivalence,
                tokenize_policy: global.tokenize_policy,
                max_tokens: global.max_tokens,
            },
        }
    }
}

impl From<EquivalenceConfig> for EffectiveSettings {
    fn from(equivalence: EquivalenceConfig) -> Self {
        Self {
            equivalence,
            tokenize_policy: TokenizePolicy::default(),
            max_tokens: None,
        }
    }
}
