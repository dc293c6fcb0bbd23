//! The overtime report.
//!
//! [`OvertimeAccumulator`] holds the running totals. [`OvertimeReport`] pairs
//! it with an output sink and writes each section as it becomes available.
//! [`run`] performs a whole pass over the configured log.
//!
//! # Example
//!
//! ```
//! use overtime_report::config::ReportConfig;
//! use overtime_report::models::AttendanceRecord;
//! use overtime_report::report::OvertimeReport;
//!
//! let mut report = OvertimeReport::new(&ReportConfig::default(), Vec::new());
//! report.ingest(&AttendanceRecord::new("01/06/2020", "09:00", "19:30")).unwrap();
//! report.finalize_total().unwrap();
//!
//! let text = String::from_utf8(report.into_inner()).unwrap();
//! assert!(text.contains("Overtime: +1:30"));
//! assert!(text.contains("Hours: 1   Minutes: 30 "));
//! ```

mod accumulator;
pub mod render;
mod scan;

use std::io::Write;

use tracing::{info, warn};

use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};
use crate::models::AttendanceRecord;

pub use accumulator::OvertimeAccumulator;
pub use scan::{open_log, scan, scan_file};

/// An accumulator that writes the report to `out` as it goes.
#[derive(Debug)]
pub struct OvertimeReport<W: Write> {
    accumulator: OvertimeAccumulator,
    out: W,
}

impl<W: Write> OvertimeReport<W> {
    /// Creates a report with empty totals writing to `out`.
    pub fn new(config: &ReportConfig, out: W) -> Self {
        Self {
            accumulator: OvertimeAccumulator::new(config),
            out,
        }
    }

    /// Writes the banner of the daily section.
    pub fn start_daily(&mut self) -> ReportResult<()> {
        render::write_header(&mut self.out, render::DAILY_TITLE, render::DAILY_WIDTH)
    }

    /// Accumulates one record and writes its daily line.
    ///
    /// Records whose entry and exit are equal produce no line.
    pub fn ingest(&mut self, record: &AttendanceRecord) -> ReportResult<()> {
        if let Some(daily) = self.accumulator.ingest(record)? {
            render::write_daily_line(&mut self.out, &daily)?;
        }
        Ok(())
    }

    /// Writes the closing border of the daily section.
    pub fn finish_daily(&mut self) -> ReportResult<()> {
        render::write_border(&mut self.out, render::DAILY_WIDTH)
    }

    /// Writes the weekly section, one line per week in ascending order.
    pub fn finalize_weekly(&mut self) -> ReportResult<()> {
        render::write_header(&mut self.out, render::WEEKLY_TITLE, render::WEEKLY_WIDTH)?;
        for weekly in self.accumulator.weekly() {
            render::write_weekly_line(&mut self.out, &weekly)?;
        }
        render::write_border(&mut self.out, render::WEEKLY_WIDTH)
    }

    /// Writes the total section.
    pub fn finalize_total(&mut self) -> ReportResult<()> {
        render::write_header(&mut self.out, render::TOTAL_TITLE, render::TOTAL_WIDTH)?;
        render::write_total_line(&mut self.out, self.accumulator.total())?;
        render::write_border(&mut self.out, render::TOTAL_WIDTH)
    }

    /// Writes the message of a failed scan in place of the remaining sections.
    pub fn write_diagnostic(&mut self, error: &ReportError) -> ReportResult<()> {
        writeln!(self.out, "{}", error)?;
        Ok(())
    }

    /// Returns the running totals.
    pub fn accumulator(&self) -> &OvertimeAccumulator {
        &self.accumulator
    }

    /// Consumes the report and returns the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Produces the full report for the configured log on `out`.
///
/// A failed scan is not an error of `run`: its message is written to `out`
/// after whatever daily lines were already produced, and the weekly and
/// total sections are left out. `run` only fails when `out` itself cannot be
/// written. Returns the sink.
pub fn run<W: Write>(config: &ReportConfig, out: W) -> ReportResult<W> {
    let mut report = OvertimeReport::new(config, out);
    report.start_daily()?;

    info!(path = %config.csv_file.display(), "Scanning attendance log");
    match scan_file(config, &mut report) {
        Ok(()) => {
            report.finish_daily()?;
            report.finalize_weekly()?;
            report.finalize_total()?;
            info!(
                weeks = report.accumulator().weekly().len(),
                total_seconds = report.accumulator().total().num_seconds(),
                "Report complete"
            );
        }
        Err(error) => {
            warn!(error = %error, "Scan aborted");
            report.write_diagnostic(&error)?;
        }
    }

    Ok(report.into_inner())
}
