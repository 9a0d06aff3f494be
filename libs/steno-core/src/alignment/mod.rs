//! Token alignment: LCS matching followed by the classifying merge-walk.

pub mod classify;
pub mod lcs;

pub use classify::{classify, differs_only_in_punctuation, is_soft_punctuation, Classification};
pub use lcs::{align, MatchPairs};
