use super::*;

fn sample_round(number: u32) -> Round {
    Round {
        number,
        alliance_a: vec![4, 1],
        alliance_b: vec![0, 3],
        sitting_out: vec![2],
        non_scoring: vec![3],
    }
}

#[test]
fn test_participants_alliance_a_first() {
    let round = sample_round(1);

    assert_eq!(round.participants().collect::<Vec<_>>(), vec![4, 1, 0, 3]);
    assert!(round.is_playing(0));
    assert!(!round.is_playing(2));
}

#[test]
fn test_counts_for_ranking() {
    let round = sample_round(1);

    assert!(round.counts_for_ranking(4));
    assert!(!round.counts_for_ranking(3));
    assert!(!round.counts_for_ranking(2));
}

#[test]
fn test_start_offset() {
    assert_eq!(sample_round(3).start_offset_minutes(10), 30);
}

#[test]
fn test_start_offset_large_interval() {
    let round = sample_round(3);
    let interval = u32::MAX / 2;

    assert_eq!(round.start_offset_minutes(interval), 3 * u64::from(interval));
}

#[test]
fn test_termination_labels() {
    assert!(Termination::Complete.is_complete());
    assert!(!Termination::Starved.is_complete());
    assert!(!Termination::BudgetExhausted.is_complete());
    assert_eq!(Termination::BudgetExhausted.label(), "budget exhausted");
}
