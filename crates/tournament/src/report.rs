//! Schedule results storage and reporting

use alliance_core::{EntrantId, ScheduleConfig, ScheduleOutcome, Termination};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::names::TeamNames;

const RULE_WIDTH: usize = 60;

/// A finished scheduling run together with everything needed to render it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Configuration used
    pub config: ScheduleConfig,
    /// Seed the run was started from
    pub seed: u64,
    /// Display labels indexed by entrant id
    pub names: TeamNames,
    pub outcome: ScheduleOutcome,
}

impl ScheduleReport {
    pub fn new(config: ScheduleConfig, seed: u64, names: TeamNames, outcome: ScheduleOutcome) -> Self {
        Self {
            config,
            seed,
            names,
            outcome,
        }
    }

    /// Save report to JSON file
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize report")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Load report from JSON file
    pub fn load_json(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn joined(&self, ids: &[EntrantId], separator: &str) -> String {
        self.names.labels(ids).join(separator)
    }

    fn heading(report: &mut String, title: &str) {
        report.push_str(&format!("\n{}\n", "=".repeat(RULE_WIDTH)));
        report.push_str(&format!("{}\n", title));
        report.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));
    }

    /// Rounds with both alliances and the entrants sitting out
    pub fn schedule_section(&self) -> String {
        let mut report = String::new();
        let size = self.config.alliance_size;
        Self::heading(&mut report, "TOURNAMENT SCHEDULE");

        for round in &self.outcome.rounds {
            let offset = round.start_offset_minutes(self.config.round_interval_minutes);
            report.push_str(&format!("\nMatch {} (+{} min):\n", round.number, offset));
            report.push_str(&format!(
                "  Alliance 1 ({} teams): {}\n",
                size,
                self.joined(&round.alliance_a, " & ")
            ));
            report.push_str(&format!(
                "  Alliance 2 ({} teams): {}\n",
                size,
                self.joined(&round.alliance_b, " & ")
            ));
            if !round.sitting_out.is_empty() {
                report.push_str(&format!(
                    "  Sitting out ({} teams): {}\n",
                    round.sitting_out.len(),
                    self.joined(&round.sitting_out, ", ")
                ));
            }
            if !round.non_scoring.is_empty() {
                report.push_str(&format!(
                    "  Not counted for ranking: {}\n",
                    self.joined(&round.non_scoring, ", ")
                ));
            }
        }

        report
    }

    /// Rounds played, partners and opponents per team
    pub fn statistics_section(&self) -> String {
        let mut report = String::new();
        Self::heading(&mut report, "TEAM STATISTICS");

        for record in &self.outcome.entrants {
            let partners: Vec<EntrantId> = record.partners.iter().copied().collect();
            let opponents: Vec<EntrantId> = record.opponents.iter().copied().collect();

            report.push_str(&format!("\n{}:\n", self.names.label(record.id)));
            report.push_str(&format!("  Matches played: {}\n", record.rounds_played));
            report.push_str(&format!("  Partners: {}\n", or_none(self.joined(&partners, ", "))));
            report.push_str(&format!("  Opponents: {}\n", or_none(self.joined(&opponents, ", "))));
        }

        report
    }

    /// Per-team check against the minimum round count plus the run summary
    pub fn verification_section(&self) -> String {
        let mut report = String::new();
        let min_rounds = self.config.min_rounds;
        Self::heading(&mut report, "CONSTRAINT VERIFICATION");

        for record in &self.outcome.entrants {
            let status = if record.rounds_played >= min_rounds { "✓" } else { "✗" };
            report.push_str(&format!(
                "{} {}: {} matches (min: {})\n",
                status,
                self.names.label(record.id),
                record.rounds_played,
                min_rounds
            ));
        }

        if self.outcome.unmet_entrants(min_rounds).is_empty() {
            report.push_str("\n✓ All constraints satisfied!\n");
            report.push_str(&format!(
                "✓ Total matches scheduled: {}\n",
                self.outcome.rounds.len()
            ));
        } else {
            report.push_str("\n⚠ Some constraints not fully satisfied\n");
        }

        report.push_str(&format!(
            "Repeated partnerships: {}\n",
            self.outcome.repeat_partnerships()
        ));
        report.push_str(&format!(
            "Result: {}\n",
            termination_message(self.outcome.termination, min_rounds)
        ));
        report.push_str(&format!("Seed: {}\n", self.seed));
        report.push_str(&"=".repeat(RULE_WIDTH));
        report.push('\n');

        report
    }

    /// Generate the full text report
    pub fn generate_report(&self) -> String {
        let mut report = self.schedule_section();
        report.push_str(&self.statistics_section());
        report.push_str(&self.verification_section());
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

fn or_none(joined: String) -> String {
    if joined.is_empty() {
        "None".to_string()
    } else {
        joined
    }
}

/// One-line description of how a run ended
pub fn termination_message(termination: Termination, min_rounds: u32) -> String {
    match termination {
        Termination::Complete => format!("✓ All teams have reached minimum {} matches", min_rounds),
        Termination::Starved => "⚠ Cannot form match: Not enough available teams".to_string(),
        Termination::BudgetExhausted => "⚠ Maximum iterations reached".to_string(),
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
