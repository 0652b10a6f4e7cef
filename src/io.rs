//! `;`-separated trajectory input and per-user output.
//!
//! Input rows have six fields: user ID, year, month, day, hour, location ID.
//! Output rows have the 19 columns of [`OUTPUT_HEADER`]. Both files start
//! with a header line.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;
use std::str::FromStr;

use crate::calendar;
use crate::engine::{CategorySummary, OutputRow};
use crate::{LocationId, MflError, Result, TrajectoryRecord};

pub const FIELD_SEPARATOR: char = ';';

/// Placeholder written when a category has no location.
pub const NO_MFL: &str = "NoMFL";

/// Number of fields of an input row.
pub const INPUT_FIELDS: usize = 6;

pub const OUTPUT_HEADER: [&str; 19] = [
    "ID",
    "NbMonths",
    "NbConsMonths",
    "MFLHomeDays",
    "MFLHomeDays2",
    "NbDaysHomeMFL",
    "NbDaysHome",
    "MFLHomeHours",
    "MFLHomeHours2",
    "NbHoursHomeMFL",
    "NbHoursHome",
    "MFLWorkDays",
    "MFLWorkDays2",
    "NbDaysWorkMFL",
    "NbDaysWork",
    "MFLWorkHours",
    "MFLWorkHours2",
    "NbHoursWorkMFL",
    "NbHoursWork",
];

// ============================================================================
// Input
// ============================================================================

/// Lazy record source over a header-bearing input stream.
///
/// Blank lines are skipped. Each item carries the 1-based physical line
/// number in its error, if any.
pub struct RecordReader<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> RecordReader<R> {
    /// Wrap a reader and consume its header line.
    pub fn new(reader: R) -> Result<Self> {
        let mut lines = reader.lines();
        match lines.next() {
            Some(header) => {
                header?;
            }
            None => return Err(MflError::MissingHeader),
        }
        Ok(Self { lines, line: 1 })
    }

    /// Line number of the last line read.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl RecordReader<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<TrajectoryRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line += 1;
            if line.trim().is_empty() {
                continue;
            }
            return Some(parse_record(&line, self.line));
        }
    }
}

/// Parse one data row. `line` is only used for error reporting.
pub fn parse_record(row: &str, line: usize) -> Result<TrajectoryRecord> {
    let fields: Vec<&str> = row.split(FIELD_SEPARATOR).collect();
    if fields.len() != INPUT_FIELDS {
        return Err(MflError::malformed(
            line,
            format!("expected {} fields, found {}", INPUT_FIELDS, fields.len()),
        ));
    }

    let year: i32 = parse_field(fields[1], "year", line)?;
    let month: u32 = parse_field(fields[2], "month", line)?;
    let day: u32 = parse_field(fields[3], "day", line)?;
    let hour: u32 = parse_field(fields[4], "hour", line)?;
    let location: LocationId = parse_field(fields[5], "location", line)?;

    if !(1..=12).contains(&month) {
        return Err(MflError::malformed(line, format!("month {} out of range", month)));
    }
    if hour > 23 {
        return Err(MflError::malformed(line, format!("hour {} out of range", hour)));
    }
    if !calendar::is_valid_date(year, month, day) {
        return Err(MflError::malformed(
            line,
            format!("invalid calendar date {}-{:02}-{:02}", year, month, day),
        ));
    }

    Ok(TrajectoryRecord::new(fields[0], year, month, day, hour, location))
}

fn parse_field<T: FromStr>(raw: &str, name: &str, line: usize) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| MflError::malformed(line, format!("{} is not an integer: '{}'", name, raw)))
}

// ============================================================================
// Output
// ============================================================================

/// Destination of per-user rows.
pub trait RowSink {
    fn write_row(&mut self, row: &OutputRow) -> Result<()>;
}

impl RowSink for Vec<OutputRow> {
    fn write_row(&mut self, row: &OutputRow) -> Result<()> {
        self.push(row.clone());
        Ok(())
    }
}

/// Writes the header on creation, then one line per row.
pub struct RowWriter<W: Write> {
    out: W,
    rows: u64,
}

impl<W: Write> RowWriter<W> {
    pub fn new(mut out: W) -> Result<Self> {
        writeln!(out, "{}", OUTPUT_HEADER.join(";"))?;
        Ok(Self { out, rows: 0 })
    }

    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl RowWriter<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> RowSink for RowWriter<W> {
    fn write_row(&mut self, row: &OutputRow) -> Result<()> {
        writeln!(self.out, "{}", format_row(row).join(";"))?;
        self.rows += 1;
        Ok(())
    }
}

/// The 19 output fields of a row, in header order.
pub fn format_row(row: &OutputRow) -> Vec<String> {
    let mut fields = Vec::with_capacity(OUTPUT_HEADER.len());
    fields.push(row.user_id.clone());
    fields.push(row.months.to_string());
    fields.push(row.consecutive_months.to_string());
    for category in [&row.home_days, &row.home_hours, &row.work_days, &row.work_hours] {
        push_category(&mut fields, category);
    }
    fields
}

fn push_category(fields: &mut Vec<String>, category: &CategorySummary) {
    fields.push(location_field(category.mfl.primary));
    fields.push(location_field(category.mfl.secondary));
    fields.push(category.mfl.primary_count.to_string());
    fields.push(category.coverage.to_string());
}

fn location_field(location: Option<LocationId>) -> String {
    location.map_or_else(|| NO_MFL.to_string(), |l| l.to_string())
}
