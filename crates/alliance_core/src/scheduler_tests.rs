use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_rounds_per_match() {
    assert_eq!(Scheduler::new(5, 2, 3).rounds_per_match(), 4);
    assert_eq!(Scheduler::new(9, 3, 3).rounds_per_match(), 6);
}

#[test]
fn test_step_numbers_rounds_from_one() {
    let mut scheduler = Scheduler::new(5, 2, 2);
    let mut rng = StdRng::seed_from_u64(3);

    assert_eq!(scheduler.step(&mut rng), Step::Played(1));
    assert_eq!(scheduler.step(&mut rng), Step::Played(2));
    assert_eq!(scheduler.rounds()[1].number, 2);
}

#[test]
fn test_finished_scheduler_is_inert() {
    let mut scheduler = Scheduler::new(4, 2, 1);
    let mut rng = StdRng::seed_from_u64(5);

    assert_eq!(scheduler.step(&mut rng), Step::Played(1));
    assert_eq!(scheduler.step(&mut rng), Step::Finished(Termination::Complete));
    assert_eq!(scheduler.step(&mut rng), Step::Finished(Termination::Complete));
    assert_eq!(scheduler.rounds().len(), 1);
    assert_eq!(scheduler.termination(), Some(Termination::Complete));
}

#[test]
fn test_zero_budget_exhausts_immediately() {
    let outcome = Scheduler::new(4, 2, 1)
        .with_max_iterations(0)
        .run(&mut StdRng::seed_from_u64(0));

    assert_eq!(outcome.termination, Termination::BudgetExhausted);
    assert!(outcome.rounds.is_empty());
}

#[test]
fn test_no_entrants_is_trivially_complete() {
    let outcome = Scheduler::new(0, 2, 3).run(&mut StdRng::seed_from_u64(0));

    assert_eq!(outcome.termination, Termination::Complete);
    assert!(outcome.rounds.is_empty());
}

#[test]
fn test_scoring_cap_marks_extra_appearances() {
    // With 4 entrants everyone plays every round
    let outcome = Scheduler::new(4, 2, 3)
        .with_max_scoring_rounds(Some(2))
        .run(&mut StdRng::seed_from_u64(9));

    assert_eq!(outcome.rounds.len(), 3);
    assert!(outcome.rounds[0].non_scoring.is_empty());
    assert!(outcome.rounds[1].non_scoring.is_empty());
    assert_eq!(outcome.rounds[2].non_scoring, vec![0, 1, 2, 3]);
    assert!(!outcome.rounds[2].counts_for_ranking(0));
    assert!(outcome.rounds[1].counts_for_ranking(0));
}

#[test]
fn test_from_config_applies_limits() {
    let config = ScheduleConfig {
        num_entrants: 6,
        min_rounds: 50,
        alliance_size: 2,
        max_iterations: 4,
        ..Default::default()
    };

    let outcome = Scheduler::from_config(&config).run(&mut StdRng::seed_from_u64(1));

    assert_eq!(outcome.termination, Termination::BudgetExhausted);
    assert_eq!(outcome.rounds.len(), 4);
    assert_eq!(outcome.entrants.len(), 6);
}

#[test]
fn test_oversized_alliance_starves() {
    let mut scheduler = Scheduler::new(6, usize::MAX, 2);

    assert_eq!(scheduler.rounds_per_match(), usize::MAX);
    assert_eq!(
        scheduler.step(&mut StdRng::seed_from_u64(0)),
        Step::Finished(Termination::Starved)
    );
}
