//! Display labels for entrants

use alliance_core::EntrantId;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

const ADJECTIVES: &[&str] = &[
    "Thunder", "Lightning", "Fire", "Ice", "Storm", "Shadow", "Golden", "Silver", "Bronze",
    "Crystal", "Electric", "Cosmic", "Mystic", "Dragon", "Phoenix", "Tiger", "Lion", "Eagle",
    "Wolf", "Bear", "Cobra", "Panther", "Falcon", "Hawk",
];

const NOUNS: &[&str] = &[
    "Hawks", "Eagles", "Lions", "Tigers", "Bears", "Wolves", "Dragons", "Phoenixes", "Panthers",
    "Cobras", "Falcons", "Warriors", "Champions", "Legends", "Masters", "Titans", "Giants",
    "Knights", "Samurai", "Ninjas", "Gladiators", "Vikings", "Spartans", "Pirates", "Cowboys",
    "Outlaws",
];

/// Unique display names indexed by entrant id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamNames {
    names: Vec<String>,
}

impl TeamNames {
    /// Generate `count` unique "<Adjective> <Noun>" names.
    ///
    /// Once every combination is used the remaining entrants are labelled
    /// "Team <n>".
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let mut pool: Vec<String> = ADJECTIVES
            .iter()
            .flat_map(|adj| NOUNS.iter().map(move |noun| format!("{} {}", adj, noun)))
            .collect();
        pool.shuffle(rng);
        pool.truncate(count);

        let generated = pool.len();
        pool.extend((generated..count).map(|i| format!("Team {}", i + 1)));

        Self { names: pool }
    }

    pub fn from_names(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn label(&self, id: EntrantId) -> &str {
        self.names.get(id).map(String::as_str).unwrap_or("Unknown")
    }

    /// Labels for a list of entrants, in order
    pub fn labels(&self, ids: &[EntrantId]) -> Vec<&str> {
        ids.iter().map(|&id| self.label(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntrantId, &str)> + '_ {
        self.names.iter().map(String::as_str).enumerate()
    }
}

#[cfg(test)]
#[path = "names_tests.rs"]
mod names_tests;
