//! Reading the attendance log.

use std::fs::File;
use std::io::{Read, Write};

use tracing::debug;

use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};
use crate::models::AttendanceRecord;

use super::OvertimeReport;

/// Opens the configured attendance log.
///
/// # Errors
///
/// Returns [`ReportError::FileNotFound`] for any failure to open the file.
pub fn open_log(config: &ReportConfig) -> ReportResult<File> {
    File::open(&config.csv_file).map_err(|_| ReportError::FileNotFound {
        path: config.csv_file.display().to_string(),
    })
}

/// Feeds every row after the header into `report`, stopping at the first
/// error.
///
/// Rows may have differing field counts; columns beyond the configured ones
/// are ignored. Blank lines are skipped by the csv reader instead of being
/// treated as rows with missing columns. Lines already written for earlier
/// rows stay written when a later row fails.
pub fn scan<R: Read, W: Write>(
    input: R,
    config: &ReportConfig,
    report: &mut OvertimeReport<W>,
) -> ReportResult<()> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut rows = 0usize;
    for row in reader.records() {
        let row = row?;
        let record = AttendanceRecord::from_row(&row, config)?;
        report.ingest(&record)?;
        rows += 1;
    }

    debug!(rows, "Scanned attendance log");
    Ok(())
}

/// Opens the configured log and scans it into `report`.
pub fn scan_file<W: Write>(
    config: &ReportConfig,
    report: &mut OvertimeReport<W>,
) -> ReportResult<()> {
    let file = open_log(config)?;
    scan(file, config, report)
}
