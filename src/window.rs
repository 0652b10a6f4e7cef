//! Home and work window classification.
//!
//! Both predicates only accept working days (Monday-Friday). They are
//! evaluated independently; nothing stops a record from belonging to both
//! windows when the configured ranges overlap.

use crate::calendar::is_working_day;
use crate::WindowConfig;

/// Home (nighttime) window membership.
///
/// The window is `hour >= min_home_hour OR hour <= max_home_hour`, which
/// covers ranges that wrap past midnight such as 20h-7h.
///
/// # Example
/// ```
/// use tracemfl::{is_home_window, WindowConfig};
/// let config = WindowConfig::new(20, 7, 8, 19);
/// assert!(is_home_window(23, 0, &config));
/// assert!(is_home_window(5, 0, &config));
/// assert!(!is_home_window(12, 0, &config));
/// assert!(!is_home_window(23, 6, &config)); // Sunday
/// ```
pub fn is_home_window(hour: u32, weekday: u32, config: &WindowConfig) -> bool {
    is_working_day(weekday) && (hour >= config.min_home_hour || hour <= config.max_home_hour)
}

/// Work (daytime) window membership: `min_work_hour <= hour <= max_work_hour`.
pub fn is_work_window(hour: u32, weekday: u32, config: &WindowConfig) -> bool {
    is_working_day(weekday) && (config.min_work_hour..=config.max_work_hour).contains(&hour)
}

/// Window membership of a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowMembership {
    pub home: bool,
    pub work: bool,
}

impl WindowMembership {
    pub fn is_none(&self) -> bool {
        !self.home && !self.work
    }
}

/// Classify an hour of a given weekday against both windows.
pub fn classify(hour: u32, weekday: u32, config: &WindowConfig) -> WindowMembership {
    WindowMembership {
        home: is_home_window(hour, weekday, config),
        work: is_work_window(hour, weekday, config),
    }
}
