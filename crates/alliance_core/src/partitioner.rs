//! Alliance formation for a selected round
//!
//! Every way of choosing alliance A from the selected entrants is scored by
//! how many within-alliance pairs have already been partners. Opponent
//! history is tracked elsewhere but never penalized here. The lowest score
//! wins; ties go to the first split in enumeration order, so the result is
//! fully determined by the order of the selected entrants.

use crate::types::{EntrantId, EntrantRecord};

/// A candidate split of a round's entrants into two alliances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllianceSplit {
    pub alliance_a: Vec<EntrantId>,
    pub alliance_b: Vec<EntrantId>,
    /// Number of within-alliance pairs that already partnered before
    pub score: u32,
}

/// Lexicographic `k`-combinations of the indices `0..n`.
///
/// Yields `[0, 1, .., k-1]` first and `[n-k, .., n-1]` last.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = self.indices.clone();
        let k = self.indices.len();

        // Rightmost index that can still move right
        match (0..k).rev().find(|&i| self.indices[i] != i + self.n - k) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(current)
    }
}

/// Count pairs inside `alliance` that have been partners before.
///
/// `entrants` is indexed by entrant id.
pub fn partnership_score(alliance: &[EntrantId], entrants: &[EntrantRecord]) -> u32 {
    let mut score = 0;
    for (i, &a) in alliance.iter().enumerate() {
        for &b in &alliance[i + 1..] {
            if entrants.get(a).is_some_and(|record| record.has_partnered(b)) {
                score += 1;
            }
        }
    }
    score
}

/// Every split of `selected` into an alliance of `alliance_size` and its
/// complement, in enumeration order.
pub fn candidate_splits<'a>(
    selected: &'a [EntrantId],
    alliance_size: usize,
    entrants: &'a [EntrantRecord],
) -> impl Iterator<Item = AllianceSplit> + 'a {
    Combinations::new(selected.len(), alliance_size).map(move |chosen| {
        let alliance_a: Vec<EntrantId> = chosen.iter().map(|&i| selected[i]).collect();
        let alliance_b: Vec<EntrantId> = selected
            .iter()
            .enumerate()
            .filter(|(i, _)| !chosen.contains(i))
            .map(|(_, &id)| id)
            .collect();
        let score =
            partnership_score(&alliance_a, entrants) + partnership_score(&alliance_b, entrants);

        AllianceSplit {
            alliance_a,
            alliance_b,
            score,
        }
    })
}

/// Pick the split with the fewest repeated partnerships.
///
/// Returns `None` only when `selected` holds fewer than `alliance_size`
/// entrants.
pub fn form_alliances(
    selected: &[EntrantId],
    alliance_size: usize,
    entrants: &[EntrantRecord],
) -> Option<AllianceSplit> {
    // min_by_key keeps the first of equally scored splits
    candidate_splits(selected, alliance_size, entrants).min_by_key(|split| split.score)
}

#[cfg(test)]
#[path = "partitioner_tests.rs"]
mod partitioner_tests;
