//! Script-aware token normalization.
//!
//! Canonical forms are used for comparison only and never shown to the
//! user. The pipeline runs in a fixed order, each stage feeding the next:
//!
//! 1. legacy glyph decomposition (optional, Kruti Dev alt-codes)
//! 2. nukta stripping
//! 3. chandra-bindu folding
//! 4. nasal cluster folding
//! 5. NFD then NFC round-trip

pub mod tables;

use crate::types::EquivalenceConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;
use tables::{ANUSVAR, CHANDRABINDU, LEGACY_GLYPHS, NASAL_CLUSTERS, NUKTA, WORD_EXCEPTIONS};
use unicode_normalization::UnicodeNormalization;

/// How two single words relate under the equivalence rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordMatch {
    /// Identical strings.
    Exact,
    /// Equal after canonicalization or listed as a word exception.
    Equivalent,
    /// One canonical form contains the other.
    Partial,
    None,
}

/// Token canonicalizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    legacy_glyphs: bool,
}

impl Normalizer {
    pub fn new(legacy_glyphs: bool) -> Self {
        Self { legacy_glyphs }
    }

    /// Build the normalizer described by an equivalence config.
    pub fn from_config(config: &EquivalenceConfig) -> Self {
        Self::new(config.legacy_glyphs)
    }

    /// Canonical comparison form of a token.
    pub fn canonicalize(&self, token: &str) -> String {
        let decoded;
        let input = if self.legacy_glyphs {
            decoded = decode_legacy_glyphs(token);
            decoded.as_str()
        } else {
            token
        };

        let stripped = strip_nukta(input);
        let folded = fold_chandrabindu(&stripped);
        let folded = fold_nasal_clusters(&folded);
        recompose(&folded)
    }

    /// Whether two tokens count as the same word.
    pub fn equivalent(&self, a: &str, b: &str) -> bool {
        a == b || self.keys_equivalent(&self.canonicalize(a), &self.canonicalize(b))
    }

    /// Equivalence test on already canonicalized keys.
    pub fn keys_equivalent(&self, a: &str, b: &str) -> bool {
        a == b || same_exception_class(a, b)
    }

    /// Classify how a typed word relates to its master word.
    pub fn compare(&self, master: &str, typed: &str) -> WordMatch {
        if master == typed {
            return WordMatch::Exact;
        }

        let master_key = self.canonicalize(master);
        let typed_key = self.canonicalize(typed);

        if self.keys_equivalent(&master_key, &typed_key) {
            WordMatch::Equivalent
        } else if !master_key.is_empty()
            && !typed_key.is_empty()
            && (master_key.contains(typed_key.as_str()) || typed_key.contains(master_key.as_str()))
        {
            WordMatch::Partial
        } else {
            WordMatch::None
        }
    }
}

/// Canonicalize with the Unicode rules only.
pub fn canonicalize(token: &str) -> String {
    Normalizer::default().canonicalize(token)
}

/// Whether both words belong to the same whole-word exception class.
pub fn is_word_exception(a: &str, b: &str) -> bool {
    same_exception_class(&canonicalize(a), &canonicalize(b))
}

/// Token equality gated by the equivalence config.
///
/// With equivalence off only exact identity matches.
pub fn equal(a: &str, b: &str, config: &EquivalenceConfig) -> bool {
    if !config.enabled {
        return a == b;
    }
    Normalizer::from_config(config).equivalent(a, b)
}

/// Remove the nukta, including from precomposed nukta letters.
pub fn strip_nukta(text: &str) -> String {
    text.nfd().filter(|&c| c != NUKTA).collect()
}

/// Map chandra-bindu onto the anusvar.
pub fn fold_chandrabindu(text: &str) -> String {
    text.chars()
        .map(|c| if c == CHANDRABINDU { ANUSVAR } else { c })
        .collect()
}

/// Replace half-nasal clusters with anusvar + consonant until none remain.
pub fn fold_nasal_clusters(text: &str) -> String {
    let mut folded = text.to_string();
    loop {
        let mut changed = false;
        for (cluster, replacement) in NASAL_CLUSTERS {
            if folded.contains(cluster) {
                folded = folded.replace(cluster, replacement);
                changed = true;
            }
        }
        // Every replacement drops the virama, so this terminates.
        if !changed {
            return folded;
        }
    }
}

/// Decompose then recompose to one canonical code point sequence.
pub fn recompose(text: &str) -> String {
    text.nfd().nfc().collect()
}

/// Expand Kruti Dev alt-code glyphs into their keystroke spellings.
pub fn decode_legacy_glyphs(text: &str) -> String {
    let mut decoded: String = text.nfc().collect();
    for (glyph, expansion) in LEGACY_GLYPHS {
        if decoded.contains(glyph) {
            decoded = decoded.replace(glyph, expansion);
        }
    }
    decoded
}

fn exception_classes() -> &'static HashMap<String, usize> {
    static CLASSES: OnceLock<HashMap<String, usize>> = OnceLock::new();
    CLASSES.get_or_init(|| {
        let mut classes = HashMap::new();
        for (id, forms) in WORD_EXCEPTIONS.iter().enumerate() {
            for form in forms.iter() {
                classes.insert(canonicalize(form), id);
            }
        }
        classes
    })
}

fn same_exception_class(a_key: &str, b_key: &str) -> bool {
    let classes = exception_classes();
    match (classes.get(a_key), classes.get(b_key)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
