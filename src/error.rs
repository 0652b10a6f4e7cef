//! Error types for trajectory aggregation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MflError>;

/// Errors raised while reading, aggregating or writing trajectories.
///
/// Every variant is fatal: a run stops at the first error.
#[derive(Debug, Error)]
pub enum MflError {
    /// An input row could not be turned into a record.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// A record built in code names a date that does not exist.
    #[error("invalid calendar date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The input stream is completely empty, not even a header line.
    #[error("input has no header line")]
    MissingHeader,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MflError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        MflError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
