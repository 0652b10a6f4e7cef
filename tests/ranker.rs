//! Tests for MFL ranking

use tracemfl::engine::rank_counts;
use tracemfl::{rank, DayKey, FrequencyTable, MflResult};

fn day(day: u32) -> DayKey {
    DayKey {
        year: 2024,
        month: 1,
        day,
    }
}

#[test]
fn test_empty_table() {
    let table: FrequencyTable<DayKey> = FrequencyTable::new();
    let result = rank(&table);

    assert_eq!(result, MflResult::default());
    assert!(result.is_empty());
    assert_eq!(result.primary_count, 0);
}

#[test]
fn test_single_location() {
    let result = rank_counts([(4, 2)]);
    assert_eq!(result.primary, Some(4));
    assert_eq!(result.secondary, None);
    assert_eq!(result.primary_count, 2);
}

#[test]
fn test_clear_winner() {
    let result = rank_counts([(1, 2), (2, 5), (3, 4)]);
    assert_eq!(result.primary, Some(2));
    assert_eq!(result.secondary, None);
    assert_eq!(result.primary_count, 5);
}

#[test]
fn test_tie_resolved_by_first_seen() {
    let result = rank_counts([(9, 3), (4, 3)]);
    assert_eq!(result.primary, Some(9));
    assert_eq!(result.secondary, Some(4));
    assert!(result.is_tied());

    let result = rank_counts([(4, 3), (9, 3)]);
    assert_eq!(result.primary, Some(4));
    assert_eq!(result.secondary, Some(9));
}

#[test]
fn test_tie_after_lower_entry() {
    let result = rank_counts([(1, 1), (2, 3), (3, 2), (4, 3)]);
    assert_eq!(result.primary, Some(2));
    assert_eq!(result.secondary, Some(4));
    assert_eq!(result.primary_count, 3);
}

#[test]
fn test_runner_up_below_top_is_not_secondary() {
    let result = rank_counts([(1, 3), (2, 2), (3, 2)]);
    assert_eq!(result.primary, Some(1));
    assert_eq!(result.secondary, None);
}

#[test]
fn test_three_way_tie_reports_two() {
    let result = rank_counts([(1, 2), (2, 2), (3, 2)]);
    assert_eq!(result.primary, Some(1));
    assert_eq!(result.secondary, Some(2));
}

#[test]
fn test_higher_count_clears_previous_tie() {
    let result = rank_counts([(1, 2), (2, 2), (3, 5)]);
    assert_eq!(result.primary, Some(3));
    assert_eq!(result.secondary, None);
}

#[test]
fn test_rank_from_table() {
    let mut table = FrequencyTable::new();
    for d in 1..=3 {
        table.record(100, day(d));
    }
    for d in 4..=6 {
        table.record(200, day(d));
    }
    table.record(300, day(7));

    let result = rank(&table);
    assert_eq!(result.primary, Some(100));
    assert_eq!(result.secondary, Some(200));
    assert_eq!(result.primary_count, 3);
}
