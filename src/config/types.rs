//! The report configuration value.

use std::path::PathBuf;

use chrono::Duration;

use super::defaults;

/// Settings for one report run.
///
/// Always built from the constants in [`defaults`] by the binary; tests
/// override individual fields with struct update syntax.
///
/// # Example
///
/// ```
/// use overtime_report::config::ReportConfig;
///
/// let config = ReportConfig {
///     csv_file: "/tmp/attendance.csv".into(),
///     ..ReportConfig::default()
/// };
/// assert_eq!(config.delimiter, b',');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Path of the attendance log.
    pub csv_file: PathBuf,
    /// Field delimiter byte.
    pub delimiter: u8,
    /// chrono format string for `"<date> <time>"`.
    pub datetime_format: String,
    /// Standard working hours per day.
    pub working_hours: i64,
    /// Index of the date column.
    pub date_column: usize,
    /// Index of the entry time column.
    pub entry_column: usize,
    /// Index of the exit time column.
    pub exit_column: usize,
}

impl ReportConfig {
    /// Returns the standard working day as a duration.
    pub fn working_duration(&self) -> Duration {
        Duration::hours(self.working_hours)
    }

    /// Returns the delimiter as a character, for diagnostics.
    pub fn delimiter_char(&self) -> char {
        char::from(self.delimiter)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            csv_file: PathBuf::from(defaults::CSV_FILE),
            delimiter: defaults::CSV_SEP,
            datetime_format: defaults::DATETIME_FORMAT.to_string(),
            working_hours: defaults::WORKING_HOURS,
            date_column: defaults::DATE_COLUMN,
            entry_column: defaults::ENTRY_COLUMN,
            exit_column: defaults::EXIT_COLUMN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = ReportConfig::default();

        assert_eq!(config.csv_file, PathBuf::from("./overtime.csv"));
        assert_eq!(config.delimiter, b',');
        assert_eq!(config.datetime_format, "%m/%d/%Y %H:%M");
        assert_eq!(config.working_hours, 9);
        assert_eq!(
            (config.date_column, config.entry_column, config.exit_column),
            (0, 1, 2)
        );
    }

    #[test]
    fn test_working_duration_is_nine_hours() {
        let config = ReportConfig::default();
        assert_eq!(config.working_duration(), Duration::hours(9));
        assert_eq!(config.working_duration().num_seconds(), 32_400);
    }

    #[test]
    fn test_delimiter_char() {
        let config = ReportConfig {
            delimiter: b';',
            ..ReportConfig::default()
        };
        assert_eq!(config.delimiter_char(), ';');
    }
}
