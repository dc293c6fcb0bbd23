//! Attendance record model.

use csv::StringRecord;

use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};

/// One row of the attendance log.
///
/// The fields are kept exactly as read, surrounding whitespace included,
/// because the daily report prints them unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    /// The date, `MM/DD/YYYY`.
    pub date: String,
    /// The entry time, `HH:MM`.
    pub entry: String,
    /// The exit time, `HH:MM`.
    pub exit: String,
}

impl AttendanceRecord {
    /// Creates a record from its three fields.
    pub fn new(date: impl Into<String>, entry: impl Into<String>, exit: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            entry: entry.into(),
            exit: exit.into(),
        }
    }

    /// Extracts a record from a CSV row using the configured columns.
    ///
    /// Extra columns are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::DelimiterNotFound`] when the row is too short to
    /// hold one of the configured columns, which is what a log split on the
    /// wrong delimiter looks like.
    ///
    /// # Example
    ///
    /// ```
    /// use csv::StringRecord;
    /// use overtime_report::config::ReportConfig;
    /// use overtime_report::models::AttendanceRecord;
    ///
    /// let config = ReportConfig::default();
    /// let row = StringRecord::from(vec!["01/06/2020", "09:00", "18:00"]);
    /// let record = AttendanceRecord::from_row(&row, &config).unwrap();
    /// assert_eq!(record.exit, "18:00");
    ///
    /// let short = StringRecord::from(vec!["01/06/2020;09:00;18:00"]);
    /// assert!(AttendanceRecord::from_row(&short, &config).is_err());
    /// ```
    pub fn from_row(row: &StringRecord, config: &ReportConfig) -> ReportResult<Self> {
        let field = |index: usize| {
            row.get(index)
                .map(str::to_string)
                .ok_or(ReportError::DelimiterNotFound {
                    delimiter: config.delimiter_char(),
                })
        };

        Ok(Self {
            date: field(config.date_column)?,
            entry: field(config.entry_column)?,
            exit: field(config.exit_column)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row_keeps_whitespace() {
        let config = ReportConfig::default();
        let row = StringRecord::from(vec!["01/07/2020", " 09:00", "19:30 "]);

        let record = AttendanceRecord::from_row(&row, &config).unwrap();

        assert_eq!(record, AttendanceRecord::new("01/07/2020", " 09:00", "19:30 "));
    }

    #[test]
    fn test_from_row_ignores_extra_columns() {
        let config = ReportConfig::default();
        let row = StringRecord::from(vec!["01/07/2020", "09:00", "19:30", "remote"]);

        let record = AttendanceRecord::from_row(&row, &config).unwrap();

        assert_eq!(record.date, "01/07/2020");
        assert_eq!(record.exit, "19:30");
    }

    #[test]
    fn test_from_row_missing_exit_column() {
        let config = ReportConfig::default();
        let row = StringRecord::from(vec!["01/07/2020", "09:00"]);

        let err = AttendanceRecord::from_row(&row, &config).unwrap_err();

        assert!(matches!(err, ReportError::DelimiterNotFound { delimiter: ',' }));
    }

    #[test]
    fn test_from_row_reports_configured_delimiter() {
        let config = ReportConfig {
            delimiter: b';',
            ..ReportConfig::default()
        };
        let row = StringRecord::from(vec!["01/07/2020,09:00,19:30"]);

        let err = AttendanceRecord::from_row(&row, &config).unwrap_err();

        assert_eq!(err.to_string(), "Delimiter ';' not found");
    }

    #[test]
    fn test_from_row_uses_configured_columns() {
        let config = ReportConfig {
            date_column: 2,
            entry_column: 0,
            exit_column: 1,
            ..ReportConfig::default()
        };
        let row = StringRecord::from(vec!["08:00", "17:00", "02/03/2020"]);

        let record = AttendanceRecord::from_row(&row, &config).unwrap();

        assert_eq!(record, AttendanceRecord::new("02/03/2020", "08:00", "17:00"));
    }
}
