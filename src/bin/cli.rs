//! tracemfl CLI - Home and work location extraction
//!
//! Usage:
//!   tracemfl <input> <output> <min-home-hour> <max-home-hour> <min-work-hour> <max-work-hour>
//!
//! The input is a `;`-separated file with a header and six columns (user ID,
//! year, month, day, hour, location ID), sorted by user then time. The
//! output has one row per user with the most frequented home and work
//! locations at day and hour scale.

use clap::Parser;
use log::error;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracemfl::{
    pipeline::{run, RunConfig, DEFAULT_PROGRESS_EVERY},
    WindowConfig,
};

#[derive(Parser)]
#[command(name = "tracemfl")]
#[command(about = "Extract home and work locations from sorted trajectories", long_about = None)]
struct Cli {
    /// Sorted trajectory file (`;`-separated, with header)
    input: PathBuf,

    /// Output file, one row per user
    output: PathBuf,

    /// Lower bound (included) of the nighttime window, e.g. 20
    #[arg(value_parser = clap::value_parser!(u32).range(0..=23))]
    min_home_hour: u32,

    /// Upper bound (included) of the nighttime window, e.g. 7
    #[arg(value_parser = clap::value_parser!(u32).range(0..=23))]
    max_home_hour: u32,

    /// Lower bound (included) of the daytime window, e.g. 8
    #[arg(value_parser = clap::value_parser!(u32).range(0..=23))]
    min_work_hour: u32,

    /// Upper bound (included) of the daytime window, e.g. 19
    #[arg(value_parser = clap::value_parser!(u32).range(0..=23))]
    max_work_hour: u32,

    /// Also write the run summary as JSON
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Log the number of processed users every N users (0 disables)
    #[arg(long, default_value_t = DEFAULT_PROGRESS_EVERY)]
    progress_every: u64,

    /// Enable verbose debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    println!(
        "Parameters: {} {} {} {} {} {}",
        cli.input.display(),
        cli.output.display(),
        cli.min_home_hour,
        cli.max_home_hour,
        cli.min_work_hour,
        cli.max_work_hour
    );

    let window = WindowConfig::new(
        cli.min_home_hour,
        cli.max_home_hour,
        cli.min_work_hour,
        cli.max_work_hour,
    );
    let mut config = RunConfig::new(cli.input, cli.output, window);
    config.summary_path = cli.summary;
    config.progress_every = cli.progress_every;

    match run(&config) {
        Ok(summary) => {
            println!(
                "The total number of distinct months covered by the trajectories is {}",
                summary.total_months
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
