//! Tournament Runner for alliance schedules
//!
//! This crate wraps the scheduling core with:
//! - Team name generation for display labels
//! - Text reports (schedule, team statistics, constraint verification)
//! - JSON export of a finished run
//!
//! # Usage
//!
//! ```bash
//! # 8 teams, 2v2, everyone plays at least 4 matches
//! cargo run -p alliance_tournament -- --teams 8 --min-matches 4
//!
//! # Reproducible 3v3 schedule exported as JSON
//! cargo run -p alliance_tournament -- --teams 9 --teams-per-alliance 3 --seed 42 --json schedule.json
//! ```

mod names;
mod report;

pub use names::*;
pub use report::*;
