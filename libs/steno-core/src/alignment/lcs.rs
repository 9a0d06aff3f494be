//! Longest-common-subsequence table and backtracking.

use crate::matching::TokenMatcher;

/// Token pairs judged equal, as ascending (master index, typed index).
pub type MatchPairs = Vec<(usize, usize)>;

/// Align two token sequences.
///
/// Ties between dropping a master token and dropping a typed token are
/// broken toward the typed side: the backtrack steps left (`j - 1`) unless
/// the row above is strictly better. For `a b` against `b a` this keeps `b`
/// as the match, so the walk reports `Missing(a)`, `Correct(b)`, `Extra(a)`.
pub fn align<M>(master: &[String], typed: &[String], matcher: &M) -> MatchPairs
where
    M: TokenMatcher + ?Sized,
{
    let master_keys: Vec<_> = master.iter().map(|t| matcher.key(t)).collect();
    let typed_keys: Vec<_> = typed.iter().map(|t| matcher.key(t)).collect();
    let is_match = |i: usize, j: usize| matcher.keys_match(&master_keys[i], &typed_keys[j]);

    let table = LcsTable::build(master.len(), typed.len(), &is_match);
    table.backtrack(&is_match)
}

/// Row-major LCS lengths: `cells[i * (n + 1) + j]` is the LCS length of
/// `master[..i]` and `typed[..j]`.
struct LcsTable {
    m: usize,
    n: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    fn build(m: usize, n: usize, is_match: &impl Fn(usize, usize) -> bool) -> Self {
        let mut table = Self {
            m,
            n,
            cells: vec![0; (m + 1) * (n + 1)],
        };

        for i in 1..=m {
            for j in 1..=n {
                let value = if is_match(i - 1, j - 1) {
                    table.get(i - 1, j - 1) + 1
                } else {
                    table.get(i - 1, j).max(table.get(i, j - 1))
                };
                let index = table.index(i, j);
                table.cells[index] = value;
            }
        }

        table
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        i * (self.n + 1) + j
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[self.index(i, j)]
    }

    fn backtrack(&self, is_match: &impl Fn(usize, usize) -> bool) -> MatchPairs {
        let (mut i, mut j) = (self.m, self.n);
        let mut pairs = Vec::with_capacity(self.get(i, j) as usize);

        while i > 0 && j > 0 {
            if is_match(i - 1, j - 1) {
                pairs.push((i - 1, j - 1));
                i -= 1;
                j -= 1;
            } else if self.get(i - 1, j) > self.get(i, j - 1) {
                i -= 1;
            } else {
                j -= 1;
            }
        }

        pairs.reverse();
        pairs
    }
}
