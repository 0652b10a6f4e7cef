//! # Trace MFL
//!
//! Home and work location extraction from sorted spatio-temporal trajectories.
//!
//! For every individual in a trajectory dataset this library finds the
//! location they occupy most often (the "Most Frequented Location", MFL)
//! during two weekday activity windows:
//! - a **home** window (nighttime, may wrap past midnight, e.g. 20h-7h)
//! - a **work** window (daytime, never wraps, e.g. 8h-19h)
//!
//! Each window is evaluated at two granularities: distinct calendar days and
//! distinct hour slots. Alongside the MFLs, every user gets the number of
//! distinct months their trajectory spans and the longest run of consecutive
//! months.
//!
//! Processing is a single forward pass over records sorted by user then
//! time. Only one user's state is held in memory at a time.
//!
//! ## Features
//!
//! - **`synthetic`** - Deterministic trajectory generator for benchmarks
//!
//! ## Quick Start
//!
//! ```rust
//! use tracemfl::{aggregate_records, TrajectoryRecord, WindowConfig};
//!
//! // 2024-01-08 is a Monday
//! let records = vec![
//!     TrajectoryRecord::new("alice", 2024, 1, 8, 22, 17),
//!     TrajectoryRecord::new("alice", 2024, 1, 8, 10, 42),
//!     TrajectoryRecord::new("alice", 2024, 1, 9, 23, 17),
//! ];
//!
//! let (rows, summary) = aggregate_records(&records, &WindowConfig::default()).unwrap();
//!
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].home_days.mfl.primary, Some(17));
//! assert_eq!(rows[0].home_days.coverage, 2);
//! assert_eq!(rows[0].work_days.mfl.primary, Some(42));
//! assert_eq!(summary.total_months, 1);
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{MflError, Result};

// Calendar helpers (weekday, month succession)
pub mod calendar;
pub use calendar::weekday;

// Home/work window classification
pub mod window;
pub use window::{classify, is_home_window, is_work_window, WindowMembership};

// Per-user accumulation engine
pub mod engine;
pub use engine::{
    aggregate_records, rank, CategorySummary, FrequencyTable, GlobalMonthRegistry, MflResult,
    MonthCoverageTracker, OutputRow, RunSummary, TrajectoryAggregator, UserAccumulator,
    WindowTables,
};

// Delimited text input/output
pub mod io;
pub use io::{RecordReader, RowSink, RowWriter, NO_MFL};

// File-to-file driver
pub mod pipeline;
pub use pipeline::{run, RunConfig};

// Progress reporting
pub mod progress;
pub use progress::{AtomicProgressTracker, LogProgress, NoopProgress, ProgressCallback};

// Synthetic trajectory generator
#[cfg(feature = "synthetic")]
pub mod synthetic;

// ============================================================================
// Core Types
// ============================================================================

/// Identifier of a geographical location (antenna, cell, zone...).
pub type LocationId = i64;

/// A calendar month, used to count month coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    /// Month of the year, 1-12
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

/// A calendar day. Deduplicates "this day was already counted".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// A one-hour slot of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HourKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

/// One position of an individual's trajectory.
///
/// Records must reach the aggregator sorted by `user_id`, then
/// chronologically within a user. Sortedness is not checked.
///
/// # Example
/// ```
/// use tracemfl::{TrajectoryRecord, YearMonth};
/// let record = TrajectoryRecord::new("u1", 2021, 12, 31, 23, 7);
/// assert_eq!(record.year_month(), YearMonth::new(2021, 12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryRecord {
    pub user_id: String,
    pub year: i32,
    /// Month of the year, 1-12
    pub month: u32,
    /// Day of the month, 1-31
    pub day: u32,
    /// Hour of the day, 0-23
    pub hour: u32,
    pub location: LocationId,
}

impl TrajectoryRecord {
    /// Create a record. The date is not validated here; the aggregator
    /// rejects non-existent dates with [`MflError::InvalidDate`].
    pub fn new(
        user_id: impl Into<String>,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        location: LocationId,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            year,
            month,
            day,
            hour,
            location,
        }
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth::new(self.year, self.month)
    }

    pub fn day_key(&self) -> DayKey {
        DayKey {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    pub fn hour_key(&self) -> HourKey {
        HourKey {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
        }
    }
}

/// Hour bounds of the home and work windows.
///
/// Both bounds are inclusive. The home window wraps past midnight when
/// `min_home_hour > max_home_hour`; the work window never wraps. The two
/// windows are evaluated independently, so overlapping ranges let a record
/// count toward both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Lower bound of the nighttime window.
    /// Default: 20 (8pm)
    pub min_home_hour: u32,

    /// Upper bound of the nighttime window.
    /// Default: 7 (7am)
    pub max_home_hour: u32,

    /// Lower bound of the daytime window.
    /// Default: 8 (8am)
    pub min_work_hour: u32,

    /// Upper bound of the daytime window.
    /// Default: 19 (7pm)
    pub max_work_hour: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            min_home_hour: 20,
            max_home_hour: 7,
            min_work_hour: 8,
            max_work_hour: 19,
        }
    }
}

impl WindowConfig {
    pub fn new(
        min_home_hour: u32,
        max_home_hour: u32,
        min_work_hour: u32,
        max_work_hour: u32,
    ) -> Self {
        Self {
            min_home_hour,
            max_home_hour,
            min_work_hour,
            max_work_hour,
        }
    }

    /// Check that every bound is a valid hour of the day.
    pub fn validate(&self) -> Result<()> {
        let bounds = [
            ("min_home_hour", self.min_home_hour),
            ("max_home_hour", self.max_home_hour),
            ("min_work_hour", self.min_work_hour),
            ("max_work_hour", self.max_work_hour),
        ];
        for (name, hour) in bounds {
            if hour > 23 {
                return Err(MflError::InvalidConfig(format!(
                    "{} must be within 0-23, got {}",
                    name, hour
                )));
            }
        }
        Ok(())
    }
}
