use super::*;
use alliance_core::Scheduler;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample_report(config: ScheduleConfig, seed: u64) -> ScheduleReport {
    let mut rng = StdRng::seed_from_u64(seed);
    let names = TeamNames::from_names(
        (0..config.num_entrants)
            .map(|i| format!("T{}", i))
            .collect(),
    );
    let outcome = Scheduler::from_config(&config).run(&mut rng);
    ScheduleReport::new(config, seed, names, outcome)
}

#[test]
fn test_complete_report_sections() {
    let report = sample_report(
        ScheduleConfig {
            num_entrants: 5,
            min_rounds: 2,
            ..Default::default()
        },
        4,
    );
    let text = report.generate_report();

    assert!(text.contains("TOURNAMENT SCHEDULE"));
    assert!(text.contains("TEAM STATISTICS"));
    assert!(text.contains("CONSTRAINT VERIFICATION"));
    assert!(text.contains("Match 1 (+10 min):"));
    assert!(text.contains("Alliance 1 (2 teams): "));
    assert!(text.contains("Sitting out (1 teams): "));
    assert!(text.contains("✓ All constraints satisfied!"));
    assert!(text.contains("✓ All teams have reached minimum 2 matches"));
    assert!(text.contains("Seed: 4"));
    assert!(!text.contains("✗"));
}

#[test]
fn test_budget_exhausted_report_flags_unmet_teams() {
    let report = sample_report(
        ScheduleConfig {
            num_entrants: 6,
            min_rounds: 40,
            max_iterations: 2,
            ..Default::default()
        },
        1,
    );
    let text = report.verification_section();

    assert!(text.contains("✗ T0"));
    assert!(text.contains("⚠ Some constraints not fully satisfied"));
    assert!(text.contains("⚠ Maximum iterations reached"));
}

#[test]
fn test_statistics_show_none_without_history() {
    let config = ScheduleConfig {
        num_entrants: 3,
        ..Default::default()
    };
    let report = sample_report(config, 0);
    let text = report.statistics_section();

    assert_eq!(report.outcome.termination, Termination::Starved);
    assert!(text.contains("  Partners: None"));
    assert!(text.contains("  Opponents: None"));
    assert!(text.contains("  Matches played: 0"));
}

#[test]
fn test_non_scoring_appearances_listed() {
    let report = sample_report(
        ScheduleConfig {
            num_entrants: 4,
            min_rounds: 2,
            max_scoring_rounds: Some(1),
            ..Default::default()
        },
        2,
    );

    assert!(report.schedule_section().contains("Not counted for ranking: T0, T1, T2, T3"));
}

#[test]
fn test_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    let report = sample_report(ScheduleConfig::default(), 12);

    report.save_json(&path).unwrap();
    let loaded = ScheduleReport::load_json(&path).unwrap();

    assert_eq!(loaded.outcome, report.outcome);
    assert_eq!(loaded.names, report.names);
    assert_eq!(loaded.seed, 12);
}

#[test]
fn test_termination_messages() {
    assert_eq!(
        termination_message(Termination::Starved, 3),
        "⚠ Cannot form match: Not enough available teams"
    );
    assert!(termination_message(Termination::Complete, 3).contains("minimum 3"));
}

#[test]
fn test_large_round_interval_start_times() {
    let interval = u32::MAX / 2;
    let report = sample_report(
        ScheduleConfig {
            num_entrants: 6,
            min_rounds: 3,
            round_interval_minutes: interval,
            ..Default::default()
        },
        5,
    );
    let text = report.schedule_section();

    let third = 3 * u64::from(interval);
    assert!(text.contains(&format!("Match 3 (+{} min):", third)));
}
