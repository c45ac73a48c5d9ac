//! Schedule configuration and validation

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::scheduler::DEFAULT_MAX_ITERATIONS;
use crate::types::ALLIANCES_PER_ROUND;

/// Errors raised while loading or validating a [`ScheduleConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("need at least 1 entrant per alliance")]
    AllianceTooSmall,
    #[error("alliance size {alliance_size} is too large")]
    AllianceTooLarge { alliance_size: usize },
    #[error("minimum rounds per entrant must be positive")]
    NonPositiveMinRounds,
    #[error("need at least {required} entrants for {alliance_size}v{alliance_size} rounds, got {num_entrants}")]
    NotEnoughEntrants {
        num_entrants: usize,
        alliance_size: usize,
        required: usize,
    },
    #[error("iteration budget must be at least 1")]
    ZeroIterationBudget,
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Parameters of one scheduling run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Number of entrants in the pool
    pub num_entrants: usize,
    /// Every entrant must play at least this many rounds
    pub min_rounds: u32,
    /// Entrants per alliance (two alliances per round)
    pub alliance_size: usize,
    /// Safety bound on scheduled rounds
    pub max_iterations: u32,
    /// Appearances past this count do not count for ranking (None = all count)
    pub max_scoring_rounds: Option<u32>,
    /// Planned minutes between round starts
    pub round_interval_minutes: u32,
    /// Random seed (None = drawn from entropy by the runner)
    pub seed: Option<u64>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            num_entrants: 5,
            min_rounds: 5,
            alliance_size: 2,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_scoring_rounds: None,
            round_interval_minutes: 10,
            seed: None,
        }
    }
}

impl ScheduleConfig {
    /// Load a config from a TOML file; missing keys take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Entrants playing each round; `None` if the alliance size overflows
    pub fn rounds_per_match(&self) -> Option<usize> {
        self.alliance_size.checked_mul(ALLIANCES_PER_ROUND)
    }

    /// Entrants sitting out each round
    pub fn sitting_out_per_round(&self) -> usize {
        self.rounds_per_match()
            .map_or(0, |per_match| self.num_entrants.saturating_sub(per_match))
    }

    /// Reject formats the scheduler cannot serve
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alliance_size < 1 {
            return Err(ConfigError::AllianceTooSmall);
        }
        let Some(required) = self.rounds_per_match() else {
            return Err(ConfigError::AllianceTooLarge {
                alliance_size: self.alliance_size,
            });
        };
        if self.min_rounds < 1 {
            return Err(ConfigError::NonPositiveMinRounds);
        }
        if self.num_entrants < required {
            return Err(ConfigError::NotEnoughEntrants {
                num_entrants: self.num_entrants,
                alliance_size: self.alliance_size,
                required,
            });
        }
        if self.max_iterations < 1 {
            return Err(ConfigError::ZeroIterationBudget);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
