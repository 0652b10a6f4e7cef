//! State of one user's contiguous run of records.

use serde::Serialize;

use super::frequency::{FrequencyTable, WindowTables};
use super::months::MonthCoverageTracker;
use super::ranker::{rank, MflResult};
use crate::calendar;
use crate::window::classify;
use crate::{MflError, Result, TrajectoryRecord, WindowConfig};

/// MFL and total coverage of one category (window x granularity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CategorySummary {
    pub mfl: MflResult,
    /// Distinct days or hours covered by the category, all locations included
    pub coverage: u32,
}

impl CategorySummary {
    pub fn from_table<U>(table: &FrequencyTable<U>) -> Self
    where
        U: Copy + Eq + std::hash::Hash,
    {
        Self {
            mfl: rank(table),
            coverage: table.coverage(),
        }
    }
}

/// Summary of one user, emitted once when the user's records end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub user_id: String,
    /// Distinct months covered by the trajectory
    pub months: u32,
    /// Longest run of consecutive months
    pub consecutive_months: u32,
    pub home_days: CategorySummary,
    pub home_hours: CategorySummary,
    pub work_days: CategorySummary,
    pub work_hours: CategorySummary,
}

/// Accumulates the records of a single user.
///
/// Counts only grow while the user is active. [`finish`](Self::finish)
/// consumes the accumulator, so the next user always starts from empty
/// state.
#[derive(Debug, Clone)]
pub struct UserAccumulator {
    user_id: String,
    home: WindowTables,
    work: WindowTables,
    months: MonthCoverageTracker,
    records: u64,
}

impl UserAccumulator {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            home: WindowTables::new(),
            work: WindowTables::new(),
            months: MonthCoverageTracker::new(),
            records: 0,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Number of records observed so far.
    pub fn records(&self) -> u64 {
        self.records
    }

    pub fn home(&self) -> &WindowTables {
        &self.home
    }

    pub fn work(&self) -> &WindowTables {
        &self.work
    }

    pub fn months(&self) -> &MonthCoverageTracker {
        &self.months
    }

    /// Fold one record of this user into the state.
    pub fn observe(&mut self, record: &TrajectoryRecord, config: &WindowConfig) -> Result<()> {
        debug_assert_eq!(record.user_id, self.user_id);

        let weekday = calendar::weekday(record.year, record.month, record.day).ok_or(
            MflError::InvalidDate {
                year: record.year,
                month: record.month,
                day: record.day,
            },
        )?;

        let membership = classify(record.hour, weekday, config);
        if membership.home {
            self.home
                .record(record.location, record.day_key(), record.hour_key());
        }
        if membership.work {
            self.work
                .record(record.location, record.day_key(), record.hour_key());
        }

        self.months.observe(record.year_month());
        self.records += 1;
        Ok(())
    }

    /// Rank every category and produce the user's row.
    pub fn finish(self) -> OutputRow {
        OutputRow {
            months: self.months.month_count(),
            consecutive_months: self.months.max_consecutive(),
            home_days: CategorySummary::from_table(&self.home.days),
            home_hours: CategorySummary::from_table(&self.home.hours),
            work_days: CategorySummary::from_table(&self.work.days),
            work_hours: CategorySummary::from_table(&self.work.hours),
            user_id: self.user_id,
        }
    }
}
