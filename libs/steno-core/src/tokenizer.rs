//! Word tokenizer for master and typed texts.
//!
//! # Policies
//! - [`TokenizePolicy::WholeWords`] splits on whitespace only, so `बात।` stays
//!   a single token and punctuation differences are judged inside the word.
//! - [`TokenizePolicy::SplitPunctuation`] additionally emits each of
//!   `। , . ? ! ; :` as its own token, so `बात।` becomes `बात` and `।`.
//!
//! Both policies compose the text to NFC first so that combining marks
//! attach to their base letters the same way on both sides.

use crate::types::TokenizePolicy;
use unicode_normalization::UnicodeNormalization;

/// Punctuation emitted as standalone tokens under `SplitPunctuation`.
pub const SENTENCE_PUNCTUATION: [char; 7] = ['।', ',', '.', '?', '!', ';', ':'];

/// Split text into tokens according to the policy.
pub fn tokenize(text: &str, policy: TokenizePolicy) -> Vec<String> {
    let composed: String = text.nfc().collect();
    let words = composed.split_whitespace();

    match policy {
        TokenizePolicy::WholeWords => words.map(str::to_string).collect(),
        TokenizePolicy::SplitPunctuation => {
            let mut tokens = Vec::new();
            for word in words {
                split_punctuation(word, &mut tokens);
            }
            tokens
        }
    }
}

/// Whitespace tokenization, the engine default.
pub fn tokenize_words(text: &str) -> Vec<String> {
    tokenize(text, TokenizePolicy::WholeWords)
}

fn split_punctuation(word: &str, tokens: &mut Vec<String>) {
    let mut current = String::new();
    for ch in word.chars() {
        if SENTENCE_PUNCTUATION.contains(&ch) {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            tokens.push(ch.to_string());
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
}
