//! Month coverage: per-user span and consecutive runs, plus the
//! dataset-wide set of distinct months.

use std::collections::BTreeSet;

use crate::YearMonth;

/// Per-user month span and longest consecutive-month run.
///
/// Each observed month is compared with the month of the immediately
/// preceding record only. Repeats of the same month change nothing; a new
/// month extends the run when it is exactly the next calendar month
/// (December -> January included) and restarts it otherwise.
#[derive(Debug, Clone, Default)]
pub struct MonthCoverageTracker {
    previous: Option<YearMonth>,
    month_count: u32,
    current_run: u32,
    max_run: u32,
}

impl MonthCoverageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the month of the next record, in arrival order.
    pub fn observe(&mut self, month: YearMonth) {
        match self.previous {
            None => {
                self.month_count = 1;
                self.current_run = 1;
                self.max_run = 1;
            }
            Some(previous) if previous == month => return,
            Some(previous) => {
                self.month_count += 1;
                if month.follows(previous) {
                    self.current_run += 1;
                    self.max_run = self.max_run.max(self.current_run);
                } else {
                    self.current_run = 1;
                }
            }
        }
        self.previous = Some(month);
    }

    /// Number of month changes seen, counting the first month (`NbMonths`).
    pub fn month_count(&self) -> u32 {
        self.month_count
    }

    /// Longest run of consecutive months (`NbConsMonths`).
    pub fn max_consecutive(&self) -> u32 {
        self.max_run
    }

    /// Length of the run ending at the latest observed month.
    pub fn current_run(&self) -> u32 {
        self.current_run
    }

    pub fn is_empty(&self) -> bool {
        self.previous.is_none()
    }
}

/// Distinct months across every record of every user.
///
/// Owned by the aggregator and never reset between users.
#[derive(Debug, Clone, Default)]
pub struct GlobalMonthRegistry {
    months: BTreeSet<YearMonth>,
}

impl GlobalMonthRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a month. Returns `true` if it was not seen before.
    pub fn insert(&mut self, month: YearMonth) -> bool {
        self.months.insert(month)
    }

    pub fn contains(&self, month: &YearMonth) -> bool {
        self.months.contains(month)
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Registered months in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &YearMonth> {
        self.months.iter()
    }
}
