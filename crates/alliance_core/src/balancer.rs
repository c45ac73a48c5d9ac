//! Participation balancing: choosing who plays the next round
//!
//! Entrants with the fewest rounds played are always selected first. Ties are
//! broken by uniform sampling without replacement, using the caller's random
//! source so that seeded runs are reproducible.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::types::{EntrantId, EntrantRecord};

/// Why no round could be selected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    #[error("cannot form round: {required} entrants required, only {available} available")]
    CannotFormRound { available: usize, required: usize },
}

/// Entrants sharing the lowest `rounds_played`, in id order
pub fn fewest_rounds(entrants: &[EntrantRecord]) -> Vec<EntrantId> {
    let Some(min_count) = entrants.iter().map(|e| e.rounds_played).min() else {
        return Vec::new();
    };

    entrants
        .iter()
        .filter(|e| e.rounds_played == min_count)
        .map(|e| e.id)
        .collect()
}

/// Select exactly `rounds_per_match` entrants for the next round.
///
/// The lagging group (entrants at the minimum round count) is taken first.
/// If it is larger than a round, a random subset of it is played; otherwise
/// the remaining seats are filled at random from everyone else.
///
/// The returned order is: lagging entrants, then fillers.
pub fn select_participants<R: Rng + ?Sized>(
    entrants: &[EntrantRecord],
    rounds_per_match: usize,
    rng: &mut R,
) -> Result<Vec<EntrantId>, BalanceError> {
    if entrants.len() < rounds_per_match {
        return Err(BalanceError::CannotFormRound {
            available: entrants.len(),
            required: rounds_per_match,
        });
    }

    let floor = fewest_rounds(entrants);

    if floor.len() >= rounds_per_match {
        return Ok(floor
            .choose_multiple(rng, rounds_per_match)
            .copied()
            .collect());
    }

    let remaining: Vec<EntrantId> = entrants
        .iter()
        .map(|e| e.id)
        .filter(|id| !floor.contains(id))
        .collect();
    let needed = rounds_per_match - floor.len();

    let mut selected = floor;
    selected.extend(remaining.choose_multiple(rng, needed).copied());
    Ok(selected)
}

#[cfg(test)]
#[path = "balancer_tests.rs"]
mod balancer_tests;
