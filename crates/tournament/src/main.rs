//! Alliance Scheduler CLI
//!
//! Build a balanced match schedule for an alliance tournament and print it.

use std::path::PathBuf;

use alliance_core::{ScheduleConfig, Scheduler};
use alliance_tournament::{ScheduleReport, TeamNames};
use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn, Level};

/// Team match scheduler for alliance tournaments
#[derive(Parser, Debug)]
#[command(name = "alliance-scheduler", version, about)]
struct CliArgs {
    /// Path to TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    // --- Overrides ---
    /// Number of teams
    #[arg(long)]
    teams: Option<usize>,

    /// Minimum matches per team
    #[arg(long)]
    min_matches: Option<u32>,

    /// Number of teams per alliance
    #[arg(long)]
    teams_per_alliance: Option<usize>,

    /// Upper bound on scheduled matches
    #[arg(long)]
    max_iterations: Option<u32>,

    /// Appearances past this many matches do not count for ranking
    #[arg(long)]
    max_scoring_matches: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    /// Also write the schedule as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Log every scheduled match
    #[arg(short, long)]
    verbose: bool,
}

impl CliArgs {
    fn load_config(&self) -> Result<ScheduleConfig> {
        let mut config = match &self.config {
            Some(path) => ScheduleConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => ScheduleConfig::default(),
        };

        if let Some(teams) = self.teams {
            config.num_entrants = teams;
        }
        if let Some(min) = self.min_matches {
            config.min_rounds = min;
        }
        if let Some(size) = self.teams_per_alliance {
            config.alliance_size = size;
        }
        if let Some(max) = self.max_iterations {
            config.max_iterations = max;
        }
        if self.max_scoring_matches.is_some() {
            config.max_scoring_rounds = self.max_scoring_matches;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let config = args.load_config()?;
    config.validate().context("Invalid schedule configuration")?;

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, "starting scheduler");

    println!("Creating schedule for {} teams", config.num_entrants);
    println!("Each team must play at least {} matches", config.min_rounds);
    println!(
        "Format: {}v{} alliances ({} teams sit out each match)",
        config.alliance_size,
        config.alliance_size,
        config.sitting_out_per_round()
    );
    println!("{}", "-".repeat(60));

    let mut rng = StdRng::seed_from_u64(seed);
    let names = TeamNames::generate(config.num_entrants, &mut rng);
    let outcome = Scheduler::from_config(&config).run(&mut rng);

    if !outcome.termination.is_complete() {
        warn!(
            termination = outcome.termination.label(),
            "schedule stopped before every team reached the minimum"
        );
    }

    let report = ScheduleReport::new(config, seed, names, outcome);
    report.print_report();

    if let Some(path) = &args.json {
        report.save_json(path)?;
        info!(path = %path.display(), "wrote schedule");
    }

    Ok(())
}
