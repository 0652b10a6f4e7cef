//! # Aggregation Engine
//!
//! One forward pass over records sorted by user then time.
//!
//! ## Architecture
//!
//! - `MonthCoverageTracker` - per-user month span and consecutive runs
//! - `GlobalMonthRegistry` - distinct months across the whole dataset
//! - `FrequencyTable` - location -> distinct day/hour counts
//! - `rank` - tie-aware top-2 ranking
//! - `UserAccumulator` - one user's state, flushed into an `OutputRow`
//! - `TrajectoryAggregator` - drives the above and detects user boundaries

pub mod accumulator;
pub mod frequency;
pub mod months;
pub mod ranker;

pub use accumulator::{CategorySummary, OutputRow, UserAccumulator};
pub use frequency::{FrequencyTable, LocationEntry, WindowTables};
pub use months::{GlobalMonthRegistry, MonthCoverageTracker};
pub use ranker::{rank, rank_counts, MflResult};

use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::io::RowSink;
use crate::progress::{NoopProgress, ProgressCallback};
use crate::{Result, TrajectoryRecord, WindowConfig, YearMonth};

/// Dataset-wide figures reported once the stream is exhausted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RunSummary {
    /// Output rows emitted
    pub users: u64,
    /// Records consumed
    pub records: u64,
    /// Distinct months across every record of every user
    pub total_months: usize,
    /// Those months, in chronological order
    pub months: Vec<YearMonth>,
}

/// Streams records through per-user accumulators.
///
/// A user's state lives from their first record until the lookahead shows a
/// different user (or the end of the stream); it is then ranked, written to
/// the sink and dropped. The month registry is the only state that outlives
/// a user.
pub struct TrajectoryAggregator {
    config: WindowConfig,
    registry: GlobalMonthRegistry,
    progress: Arc<dyn ProgressCallback>,
    users: u64,
    records: u64,
}

impl TrajectoryAggregator {
    /// Create an aggregator. Fails if a window bound is not a valid hour.
    pub fn new(config: WindowConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            registry: GlobalMonthRegistry::new(),
            progress: Arc::new(NoopProgress),
            users: 0,
            records: 0,
        })
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressCallback>) -> Self {
        self.progress = progress;
        self
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn registry(&self) -> &GlobalMonthRegistry {
        &self.registry
    }

    /// Consume a sorted record stream, writing one row per user to `sink`.
    ///
    /// The first error (malformed record, invalid date, sink failure) stops
    /// the run; rows already written stay written.
    pub fn process<I, S>(&mut self, records: I, sink: &mut S) -> Result<RunSummary>
    where
        I: IntoIterator<Item = Result<TrajectoryRecord>>,
        S: RowSink + ?Sized,
    {
        let mut records = records.into_iter().peekable();
        let mut current: Option<UserAccumulator> = None;

        while let Some(record) = records.next() {
            let record = record?;

            let accumulator =
                current.get_or_insert_with(|| UserAccumulator::new(record.user_id.as_str()));
            accumulator.observe(&record, &self.config)?;
            self.registry.insert(record.year_month());
            self.records += 1;

            // An error ahead is surfaced on the next iteration
            let boundary = match records.peek() {
                Some(Ok(next)) => next.user_id != record.user_id,
                Some(Err(_)) => false,
                None => true,
            };
            if boundary {
                if let Some(finished) = current.take() {
                    self.flush(finished, sink)?;
                }
            }
        }

        Ok(self.summary())
    }

    /// Figures accumulated so far.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            users: self.users,
            records: self.records,
            total_months: self.registry.len(),
            months: self.registry.iter().copied().collect(),
        }
    }

    fn flush<S>(&mut self, accumulator: UserAccumulator, sink: &mut S) -> Result<()>
    where
        S: RowSink + ?Sized,
    {
        let records = accumulator.records();
        let row = accumulator.finish();
        debug!(
            "User {}: {} records, {} months, home={:?} work={:?}",
            row.user_id, records, row.months, row.home_days.mfl.primary, row.work_days.mfl.primary
        );
        sink.write_row(&row)?;
        self.users += 1;
        self.progress.on_user(self.users, &row.user_id);
        Ok(())
    }
}

/// Aggregate in-memory records with a fresh aggregator.
pub fn aggregate_records(
    records: &[TrajectoryRecord],
    config: &WindowConfig,
) -> Result<(Vec<OutputRow>, RunSummary)> {
    let mut aggregator = TrajectoryAggregator::new(config.clone())?;
    let mut rows = Vec::new();
    let summary = aggregator.process(records.iter().cloned().map(Ok), &mut rows)?;
    Ok((rows, summary))
}
