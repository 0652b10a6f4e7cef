//! Tests for month coverage tracking

use tracemfl::{GlobalMonthRegistry, MonthCoverageTracker, YearMonth};

fn track(months: &[(i32, u32)]) -> MonthCoverageTracker {
    let mut tracker = MonthCoverageTracker::new();
    for &(year, month) in months {
        tracker.observe(YearMonth::new(year, month));
    }
    tracker
}

#[test]
fn test_empty_tracker() {
    let tracker = MonthCoverageTracker::new();
    assert!(tracker.is_empty());
    assert_eq!(tracker.month_count(), 0);
    assert_eq!(tracker.max_consecutive(), 0);
}

#[test]
fn test_single_month() {
    let tracker = track(&[(2021, 3), (2021, 3), (2021, 3)]);
    assert_eq!(tracker.month_count(), 1);
    assert_eq!(tracker.max_consecutive(), 1);
}

#[test]
fn test_year_rollover_is_consecutive() {
    let tracker = track(&[(2021, 12), (2022, 1)]);
    assert_eq!(tracker.month_count(), 2);
    assert_eq!(tracker.max_consecutive(), 2);
}

#[test]
fn test_gap_breaks_run() {
    // Jan, Feb, Mar | May, Jun
    let tracker = track(&[(2021, 1), (2021, 2), (2021, 3), (2021, 5), (2021, 6)]);
    assert_eq!(tracker.month_count(), 5);
    assert_eq!(tracker.max_consecutive(), 3);
    assert_eq!(tracker.current_run(), 2);
}

#[test]
fn test_longest_run_after_gap() {
    let tracker = track(&[(2021, 1), (2021, 4), (2021, 5), (2021, 6), (2021, 7)]);
    assert_eq!(tracker.month_count(), 5);
    assert_eq!(tracker.max_consecutive(), 4);
}

#[test]
fn test_repeats_do_not_retrigger() {
    let tracker = track(&[(2021, 1), (2021, 1), (2021, 2), (2021, 2), (2021, 2), (2021, 3)]);
    assert_eq!(tracker.month_count(), 3);
    assert_eq!(tracker.max_consecutive(), 3);
}

#[test]
fn test_same_month_next_year_is_not_consecutive() {
    let tracker = track(&[(2021, 5), (2022, 5)]);
    assert_eq!(tracker.month_count(), 2);
    assert_eq!(tracker.max_consecutive(), 1);
}

#[test]
fn test_only_previous_record_is_compared() {
    // Returning to an earlier month counts as a new month change
    let tracker = track(&[(2021, 1), (2021, 2), (2021, 1)]);
    assert_eq!(tracker.month_count(), 3);
    assert_eq!(tracker.max_consecutive(), 2);
}

#[test]
fn test_registry_deduplicates() {
    let mut registry = GlobalMonthRegistry::new();
    assert!(registry.is_empty());

    assert!(registry.insert(YearMonth::new(2022, 1)));
    assert!(registry.insert(YearMonth::new(2021, 12)));
    assert!(!registry.insert(YearMonth::new(2022, 1)));

    assert_eq!(registry.len(), 2);
    assert!(registry.contains(&YearMonth::new(2021, 12)));
    assert!(!registry.contains(&YearMonth::new(2021, 11)));

    let months: Vec<YearMonth> = registry.iter().copied().collect();
    assert_eq!(months, vec![YearMonth::new(2021, 12), YearMonth::new(2022, 1)]);
}
