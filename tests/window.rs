//! Tests for window module

use tracemfl::{classify, is_home_window, is_work_window, WindowConfig};

const MONDAY: u32 = 0;
const FRIDAY: u32 = 4;
const SATURDAY: u32 = 5;
const SUNDAY: u32 = 6;

#[test]
fn test_home_window_wraps_past_midnight() {
    let config = WindowConfig::new(20, 7, 8, 19);

    assert!(is_home_window(23, MONDAY, &config));
    assert!(is_home_window(5, MONDAY, &config));
    assert!(is_home_window(20, MONDAY, &config));
    assert!(is_home_window(7, MONDAY, &config));
    assert!(is_home_window(0, MONDAY, &config));
    assert!(!is_home_window(12, MONDAY, &config));
    assert!(!is_home_window(8, MONDAY, &config));
    assert!(!is_home_window(19, MONDAY, &config));
}

#[test]
fn test_work_window_inclusive_bounds() {
    let config = WindowConfig::new(20, 7, 8, 19);

    assert!(is_work_window(8, FRIDAY, &config));
    assert!(is_work_window(19, FRIDAY, &config));
    assert!(is_work_window(12, FRIDAY, &config));
    assert!(!is_work_window(7, FRIDAY, &config));
    assert!(!is_work_window(20, FRIDAY, &config));
}

#[test]
fn test_weekends_excluded() {
    let config = WindowConfig::default();

    for weekday in [SATURDAY, SUNDAY] {
        for hour in 0..24 {
            assert!(!is_home_window(hour, weekday, &config));
            assert!(!is_work_window(hour, weekday, &config));
            assert!(classify(hour, weekday, &config).is_none());
        }
    }
}

#[test]
fn test_home_window_other_bounds() {
    let config = WindowConfig::new(22, 3, 9, 17);

    assert!(is_home_window(2, MONDAY, &config));
    assert!(is_home_window(22, MONDAY, &config));
    assert!(!is_home_window(4, MONDAY, &config));
    assert!(!is_home_window(21, MONDAY, &config));
}

#[test]
fn test_home_window_min_below_max_covers_every_hour() {
    // hour >= 1 OR hour <= 5 holds for every hour
    let config = WindowConfig::new(1, 5, 9, 17);

    for hour in 0..24 {
        assert!(is_home_window(hour, MONDAY, &config));
    }
}

#[test]
fn test_overlapping_windows_count_both() {
    let config = WindowConfig::new(18, 7, 8, 19);

    let membership = classify(18, MONDAY, &config);
    assert!(membership.home);
    assert!(membership.work);

    let membership = classify(12, MONDAY, &config);
    assert!(!membership.home);
    assert!(membership.work);
}

#[test]
fn test_default_config() {
    let config = WindowConfig::default();
    assert_eq!(config, WindowConfig::new(20, 7, 8, 19));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation() {
    assert!(WindowConfig::new(24, 7, 8, 19).validate().is_err());
    assert!(WindowConfig::new(20, 7, 8, 30).validate().is_err());
    assert!(WindowConfig::new(0, 23, 0, 23).validate().is_ok());
}
