//! Round loop: balance, partition, record, repeat
//!
//! The scheduler owns all per-entrant history for one run. Each step checks
//! the stop conditions in a fixed order (minimum reached, cannot form a round,
//! iteration budget spent) and otherwise plays exactly one round.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::balancer::select_participants;
use crate::config::ScheduleConfig;
use crate::partitioner::{form_alliances, AllianceSplit};
use crate::types::{
    EntrantId, EntrantRecord, Round, Schedule, ScheduleOutcome, Termination, ALLIANCES_PER_ROUND,
};

/// Safety bound on the number of rounds a single run may schedule
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Result of a single scheduler step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A round was appended; carries its 1-based number
    Played(u32),
    /// The run is over
    Finished(Termination),
}

/// Builds a schedule round by round
#[derive(Debug, Clone)]
pub struct Scheduler {
    alliance_size: usize,
    min_rounds: u32,
    max_iterations: u32,
    max_scoring_rounds: Option<u32>,
    entrants: Vec<EntrantRecord>,
    rounds: Schedule,
    iterations: u32,
    finished: Option<Termination>,
}

impl Scheduler {
    /// Create a scheduler with fresh history for `num_entrants` entrants.
    ///
    /// Inputs are taken as-is; use [`ScheduleConfig::validate`] beforehand to
    /// reject impossible formats.
    pub fn new(num_entrants: usize, alliance_size: usize, min_rounds: u32) -> Self {
        Self {
            alliance_size,
            min_rounds,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_scoring_rounds: None,
            entrants: (0..num_entrants).map(EntrantRecord::new).collect(),
            rounds: Vec::new(),
            iterations: 0,
            finished: None,
        }
    }

    pub fn from_config(config: &ScheduleConfig) -> Self {
        Self::new(config.num_entrants, config.alliance_size, config.min_rounds)
            .with_max_iterations(config.max_iterations)
            .with_max_scoring_rounds(config.max_scoring_rounds)
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Appearances beyond this many rounds no longer count for ranking
    pub fn with_max_scoring_rounds(mut self, max_scoring_rounds: Option<u32>) -> Self {
        self.max_scoring_rounds = max_scoring_rounds;
        self
    }

    pub fn rounds_per_match(&self) -> usize {
        // Saturates so an oversized alliance starves instead of overflowing
        self.alliance_size.saturating_mul(ALLIANCES_PER_ROUND)
    }

    pub fn entrants(&self) -> &[EntrantRecord] {
        &self.entrants
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn termination(&self) -> Option<Termination> {
        self.finished
    }

    fn all_met_minimum(&self) -> bool {
        self.entrants
            .iter()
            .all(|e| e.rounds_played >= self.min_rounds)
    }

    /// Check the stop conditions, then play one round if none fired.
    ///
    /// After the run has finished this keeps returning the same termination
    /// and leaves all state untouched.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Step {
        if let Some(termination) = self.finished {
            return Step::Finished(termination);
        }

        if self.all_met_minimum() {
            return self.finish(Termination::Complete);
        }

        let selected = match select_participants(&self.entrants, self.rounds_per_match(), rng) {
            Ok(selected) => selected,
            Err(err) => {
                warn!(%err, "balancer could not fill a round");
                return self.finish(Termination::Starved);
            }
        };

        if self.iterations >= self.max_iterations {
            return self.finish(Termination::BudgetExhausted);
        }

        let Some(split) = form_alliances(&selected, self.alliance_size, &self.entrants) else {
            // Unreachable when the balancer returns a full round
            return self.finish(Termination::Starved);
        };

        let number = self.record_round(&selected, split);
        self.iterations += 1;
        Step::Played(number)
    }

    /// Step until the run finishes and hand back everything it produced
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> ScheduleOutcome {
        loop {
            if let Step::Finished(termination) = self.step(rng) {
                return ScheduleOutcome {
                    rounds: self.rounds,
                    termination,
                    entrants: self.entrants,
                };
            }
        }
    }

    fn finish(&mut self, termination: Termination) -> Step {
        match termination {
            Termination::Complete => info!(
                rounds = self.rounds.len(),
                min_rounds = self.min_rounds,
                "all entrants reached the minimum round count"
            ),
            Termination::Starved => warn!(
                rounds = self.rounds.len(),
                "not enough entrants to form a round"
            ),
            Termination::BudgetExhausted => warn!(
                rounds = self.rounds.len(),
                max_iterations = self.max_iterations,
                "iteration budget exhausted before every entrant reached the minimum"
            ),
        }
        self.finished = Some(termination);
        Step::Finished(termination)
    }

    /// Append the round and fold it into the per-entrant history
    fn record_round(&mut self, selected: &[EntrantId], split: AllianceSplit) -> u32 {
        let number = self.rounds.len() as u32 + 1;

        let mut non_scoring: Vec<EntrantId> = match self.max_scoring_rounds {
            Some(cap) => selected
                .iter()
                .copied()
                .filter(|&id| self.entrants[id].rounds_played >= cap)
                .collect(),
            None => Vec::new(),
        };
        non_scoring.sort_unstable();

        let sitting_out: Vec<EntrantId> = self
            .entrants
            .iter()
            .map(|e| e.id)
            .filter(|id| !selected.contains(id))
            .collect();

        debug!(
            round = number,
            alliance_a = ?split.alliance_a,
            alliance_b = ?split.alliance_b,
            sitting_out = ?sitting_out,
            repeat_score = split.score,
            "scheduled round"
        );

        for &id in selected {
            self.entrants[id].rounds_played += 1;
        }

        for alliance in [&split.alliance_a, &split.alliance_b] {
            for (i, &a) in alliance.iter().enumerate() {
                for &b in &alliance[i + 1..] {
                    self.entrants[a].partners.insert(b);
                    self.entrants[b].partners.insert(a);
                }
            }
        }

        for &a in &split.alliance_a {
            for &b in &split.alliance_b {
                self.entrants[a].opponents.insert(b);
                self.entrants[b].opponents.insert(a);
            }
        }

        self.rounds.push(Round {
            number,
            alliance_a: split.alliance_a,
            alliance_b: split.alliance_b,
            sitting_out,
            non_scoring,
        });

        number
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
