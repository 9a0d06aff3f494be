//! Merge-walk that turns a match set into ordered outcomes.

use crate::matching::TokenMatcher;
use crate::types::{Outcome, Weight};

/// Punctuation whose omission or addition is only a half mistake.
pub const SOFT_PUNCTUATION: [char; 3] = [',', '-', '।'];

/// Outcomes in reading order with their mistake tallies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub outcomes: Vec<Outcome>,
    pub full_mistakes: usize,
    pub half_mistakes: usize,
}

impl Classification {
    fn push(&mut self, outcome: Outcome) {
        match outcome.weight() {
            Some(Weight::Full) => self.full_mistakes += 1,
            Some(Weight::Half) => self.half_mistakes += 1,
            None => {}
        }
        self.outcomes.push(outcome);
    }
}

/// Walk both token sequences against the ascending match pairs.
pub fn classify<M>(
    master: &[String],
    typed: &[String],
    matches: &[(usize, usize)],
    matcher: &M,
) -> Classification
where
    M: TokenMatcher + ?Sized,
{
    let mut result = Classification::default();
    let mut master_idx = 0;
    let mut typed_idx = 0;
    let mut pending = matches.iter().copied().peekable();

    while master_idx < master.len() || typed_idx < typed.len() {
        // Without a match ahead, every remaining token lags.
        let (master_lags, typed_lags) = match pending.peek().copied() {
            Some((m, t)) if m == master_idx && t == typed_idx => {
                result.push(Outcome::Correct {
                    typed: typed[typed_idx].clone(),
                    correct: master[master_idx].clone(),
                });
                master_idx += 1;
                typed_idx += 1;
                pending.next();
                continue;
            }
            Some((m, t)) => (master_idx < m, typed_idx < t),
            None => (master_idx < master.len(), typed_idx < typed.len()),
        };

        match (master_lags, typed_lags) {
            (true, true) => {
                let (typed_token, master_token) = (&typed[typed_idx], &master[master_idx]);
                let weight = if differs_only_in_punctuation(typed_token, master_token, matcher) {
                    Weight::Half
                } else {
                    Weight::Full
                };
                result.push(Outcome::Substitution {
                    typed: typed_token.clone(),
                    correct: master_token.clone(),
                    weight,
                });
                master_idx += 1;
                typed_idx += 1;
            }
            (true, false) => {
                let token = &master[master_idx];
                result.push(Outcome::Missing {
                    correct: token.clone(),
                    weight: lone_token_weight(token),
                });
                master_idx += 1;
            }
            (false, true) => {
                let token = &typed[typed_idx];
                result.push(Outcome::Extra {
                    typed: token.clone(),
                    weight: lone_token_weight(token),
                });
                typed_idx += 1;
            }
            // Match pairs come from `align` and are strictly ascending, so
            // the walk always lags a pending match on at least one side.
            (false, false) => {
                tracing::warn!(master_idx, typed_idx, "match pair behind the walk, skipping");
                pending.next();
            }
        }
    }

    result
}

/// Whether `token` is exactly one soft punctuation character.
pub fn is_soft_punctuation(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => SOFT_PUNCTUATION.contains(&ch),
        _ => false,
    }
}

/// Whether two tokens are the same word once soft punctuation is removed.
pub fn differs_only_in_punctuation<M>(typed: &str, master: &str, matcher: &M) -> bool
where
    M: TokenMatcher + ?Sized,
{
    let clean_typed = strip_soft_punctuation(typed);
    let clean_master = strip_soft_punctuation(master);
    !clean_typed.is_empty() && matcher.matches(&clean_typed, &clean_master)
}

fn strip_soft_punctuation(token: &str) -> String {
    token.chars().filter(|c| !SOFT_PUNCTUATION.contains(c)).collect()
}

fn lone_token_weight(token: &str) -> Weight {
    if is_soft_punctuation(token) {
        Weight::Half
    } else {
        Weight::Full
    }
}
