//! Entrant, round and schedule records

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stable identifier of an entrant. Entrants are numbered `0..num_entrants`.
pub type EntrantId = usize;

/// Number of alliances facing each other in a round
pub const ALLIANCES_PER_ROUND: usize = 2;

/// Participation and pairing history of a single entrant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrantRecord {
    pub id: EntrantId,
    /// Rounds this entrant has been selected for
    pub rounds_played: u32,
    /// Entrants ever allied with
    pub partners: BTreeSet<EntrantId>,
    /// Entrants ever faced in the opposing alliance
    pub opponents: BTreeSet<EntrantId>,
}

impl EntrantRecord {
    pub fn new(id: EntrantId) -> Self {
        Self {
            id,
            rounds_played: 0,
            partners: BTreeSet::new(),
            opponents: BTreeSet::new(),
        }
    }

    pub fn has_partnered(&self, other: EntrantId) -> bool {
        self.partners.contains(&other)
    }

    pub fn has_faced(&self, other: EntrantId) -> bool {
        self.opponents.contains(&other)
    }
}

/// A single scheduled round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based sequence number
    pub number: u32,
    pub alliance_a: Vec<EntrantId>,
    pub alliance_b: Vec<EntrantId>,
    /// Entrants not selected this round, ascending
    pub sitting_out: Vec<EntrantId>,
    /// Playing entrants whose appearance does not count for ranking, ascending
    #[serde(default)]
    pub non_scoring: Vec<EntrantId>,
}

impl Round {
    /// All playing entrants, alliance A first
    pub fn participants(&self) -> impl Iterator<Item = EntrantId> + '_ {
        self.alliance_a.iter().chain(self.alliance_b.iter()).copied()
    }

    pub fn is_playing(&self, entrant: EntrantId) -> bool {
        self.participants().any(|id| id == entrant)
    }

    pub fn counts_for_ranking(&self, entrant: EntrantId) -> bool {
        self.is_playing(entrant) && !self.non_scoring.contains(&entrant)
    }

    /// Planned start of this round, in minutes after the event starts
    pub fn start_offset_minutes(&self, interval_minutes: u32) -> u64 {
        u64::from(self.number) * u64::from(interval_minutes)
    }
}

/// Append-only sequence of rounds produced by one run
pub type Schedule = Vec<Round>;

/// How a scheduling run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Every entrant reached the minimum number of rounds
    Complete,
    /// Not enough entrants to fill both alliances
    Starved,
    /// The iteration budget ran out before everyone reached the minimum
    BudgetExhausted,
}

impl Termination {
    pub fn is_complete(self) -> bool {
        self == Termination::Complete
    }

    pub fn label(self) -> &'static str {
        match self {
            Termination::Complete => "complete",
            Termination::Starved => "starved",
            Termination::BudgetExhausted => "budget exhausted",
        }
    }
}

/// Result of a scheduling run: the schedule, how it ended and the final history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    pub rounds: Schedule,
    pub termination: Termination,
    pub entrants: Vec<EntrantRecord>,
}

impl ScheduleOutcome {
    /// Entrants that played fewer than `min_rounds` rounds
    pub fn unmet_entrants(&self, min_rounds: u32) -> Vec<EntrantId> {
        self.entrants
            .iter()
            .filter(|e| e.rounds_played < min_rounds)
            .map(|e| e.id)
            .collect()
    }

    /// Number of allied pairs that had already been allied in an earlier round
    pub fn repeat_partnerships(&self) -> usize {
        let mut seen: BTreeSet<(EntrantId, EntrantId)> = BTreeSet::new();
        let mut repeats = 0;

        for round in &self.rounds {
            for alliance in [&round.alliance_a, &round.alliance_b] {
                for (i, &a) in alliance.iter().enumerate() {
                    for &b in &alliance[i + 1..] {
                        if !seen.insert((a.min(b), a.max(b))) {
                            repeats += 1;
                        }
                    }
                }
            }
        }

        repeats
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
