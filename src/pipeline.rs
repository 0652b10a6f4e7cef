//! File-to-file driver: read the trajectory file, aggregate, write rows.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};

use crate::engine::{RunSummary, TrajectoryAggregator};
use crate::io::{RecordReader, RowWriter};
use crate::progress::LogProgress;
use crate::{Result, WindowConfig};

/// Users between two progress log lines, by default.
pub const DEFAULT_PROGRESS_EVERY: u64 = 100_000;

/// Everything a run needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Sorted `;`-separated trajectory file
    pub input_path: PathBuf,
    /// Per-user output file, overwritten
    pub output_path: PathBuf,
    pub window: WindowConfig,
    /// Optional JSON copy of the run summary
    pub summary_path: Option<PathBuf>,
    /// Log the user count every N users (0 = never)
    pub progress_every: u64,
}

impl RunConfig {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        window: WindowConfig,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            window,
            summary_path: None,
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }
}

/// Run the whole pipeline.
///
/// The output file is created even when the input holds no records; it then
/// only contains the header.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    config.window.validate()?;
    info!(
        "Aggregating {} -> {} (home {}-{}, work {}-{})",
        config.input_path.display(),
        config.output_path.display(),
        config.window.min_home_hour,
        config.window.max_home_hour,
        config.window.min_work_hour,
        config.window.max_work_hour
    );

    let reader = RecordReader::open(&config.input_path)?;
    let mut writer = RowWriter::create(&config.output_path)?;
    let mut aggregator = TrajectoryAggregator::new(config.window.clone())?
        .with_progress(Arc::new(LogProgress::new(config.progress_every)));

    let summary = aggregator.process(reader, &mut writer)?;
    writer.finish()?;

    if summary.records == 0 {
        warn!("No trajectory records in {}", config.input_path.display());
    }
    if let Some(path) = &config.summary_path {
        write_summary(&summary, path)?;
    }

    info!(
        "Processed {} records for {} users over {} distinct months",
        summary.records, summary.users, summary.total_months
    );
    Ok(summary)
}

/// Write a run summary as pretty-printed JSON.
pub fn write_summary(summary: &RunSummary, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writer.flush()?;
    Ok(())
}
