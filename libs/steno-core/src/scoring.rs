//! Marks and accuracy from mistake tallies.
//!
//! Marks = 100 - (total penalty / master words * 100), accuracy =
//! (master words - total penalty) / master words * 100. Both are rounded
//! half-up to two decimals and floored at 0.

use crate::types::AnalysisStats;

/// Penalty tallies of one analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub total_master_words: usize,
    pub total_typed_words: usize,
    pub correct_words: usize,
    pub full_mistakes: usize,
    pub half_mistakes: usize,
}

impl Tally {
    pub fn total_penalty(&self) -> f64 {
        self.full_mistakes as f64 + self.half_mistakes as f64 * 0.5
    }
}

/// Compute statistics from tallies.
pub fn score(tally: &Tally) -> AnalysisStats {
    let total_penalty = tally.total_penalty();
    let (marks, accuracy) = if tally.total_master_words == 0 {
        (100.0, 100.0)
    } else {
        let words = tally.total_master_words as f64;
        (
            clamp_round(100.0 - total_penalty / words * 100.0),
            clamp_round((words - total_penalty) / words * 100.0),
        )
    };

    AnalysisStats {
        total_master_words: tally.total_master_words,
        total_typed_words: tally.total_typed_words,
        correct_words: tally.correct_words,
        full_mistakes: tally.full_mistakes,
        half_mistakes: tally.half_mistakes,
        total_penalty,
        marks,
        accuracy,
    }
}

/// Round half-up to two decimals, floored at 0.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

fn clamp_round(value: f64) -> f64 {
    round2(value).max(0.0)
}
