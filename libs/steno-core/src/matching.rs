//! Token equality used by alignment and classification.

use crate::normalizer::Normalizer;
use crate::types::EquivalenceConfig;
use std::borrow::Cow;

/// Equality test between a master token and a typed token.
///
/// Alignment computes [`TokenMatcher::key`] once per token and compares keys
/// with [`TokenMatcher::keys_match`] for every cell of the LCS table.
pub trait TokenMatcher: Send + Sync {
    /// Matcher identifier.
    fn name(&self) -> &'static str;

    /// Comparison key for a token.
    fn key<'a>(&self, token: &'a str) -> Cow<'a, str>;

    /// Whether two keys denote the same word.
    fn keys_match(&self, a: &str, b: &str) -> bool {
        a == b
    }

    /// Whether two raw tokens denote the same word.
    fn matches(&self, a: &str, b: &str) -> bool {
        a == b || self.keys_match(&self.key(a), &self.key(b))
    }
}

/// Exact string identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl TokenMatcher for ExactMatcher {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn key<'a>(&self, token: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(token)
    }
}

/// Identity, canonical form or word exception.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquivalenceMatcher {
    normalizer: Normalizer,
}

impl EquivalenceMatcher {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }
}

impl TokenMatcher for EquivalenceMatcher {
    fn name(&self) -> &'static str {
        "equivalence"
    }

    fn key<'a>(&self, token: &'a str) -> Cow<'a, str> {
        Cow::Owned(self.normalizer.canonicalize(token))
    }

    fn keys_match(&self, a: &str, b: &str) -> bool {
        self.normalizer.keys_equivalent(a, b)
    }
}

/// Get the matcher selected by an equivalence config.
pub fn get_matcher(config: &EquivalenceConfig) -> Box<dyn TokenMatcher> {
    if config.enabled {
        Box::new(EquivalenceMatcher::new(Normalizer::from_config(config)))
    } else {
        Box::new(ExactMatcher)
    }
}
