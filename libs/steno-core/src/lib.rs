//! Word-level marking engine for typed and stenography transcription tests.
//!
//! Provides:
//! - Tokenizer with whole-word and split-punctuation policies
//! - Devanagari equivalence normalizer (nukta, chandra-bindu, nasal clusters,
//!   Kruti Dev legacy glyphs, word exceptions)
//! - LCS alignment and classification into correct, substituted, missing,
//!   extra and half-weight outcomes
//! - Marks and accuracy scoring
//! - Shared types (Outcome, AnalysisStats, settings)

pub mod alignment;
pub mod analysis;
pub mod error;
pub mod matching;
pub mod normalizer;
pub mod scoring;
pub mod tokenizer;
pub mod types;

pub use alignment::{align, classify, Classification};
pub use analysis::{analyze, analyze_text, analyze_tokens};
pub use error::{AnalysisError, Result, TextSide};
pub use matching::{get_matcher, EquivalenceMatcher, ExactMatcher, TokenMatcher};
pub use normalizer::{canonicalize, equal, is_word_exception, Normalizer, WordMatch};
pub use scoring::{score, Tally};
pub use tokenizer::{tokenize, tokenize_words};
pub use types::{
    AnalysisOverrides, AnalysisResult, AnalysisSettings, AnalysisStats, EffectiveSettings,
    EquivalenceConfig, Outcome, OutcomeKind, TokenizePolicy, Weight,
};
