use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::options::OutputFormat;
use looking_for_chars_core::CountOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeReport {
    pub start: i64,
    pub end: i64,
}

/// Outcome of one counting run, as printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub count: usize,
    pub subject_chars: usize,
    pub range: Option<RangeReport>,
    pub limit: Option<i64>,
}

impl Report {
    pub fn new(count: usize, subject: &str, options: &CountOptions) -> Self {
        Self {
            count,
            subject_chars: subject.chars().count(),
            range: options.range.map(|(start, end)| RangeReport { start, end }),
            limit: options.limit,
        }
    }
}

/// # Errors
///
/// Propagates write and serialization failures.
pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", report.count)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
