//! Error types for the overtime report.
//!
//! Every failure that can stop a scan is one variant of [`ReportError`]. The
//! `Display` text of each variant is exactly the diagnostic printed in place
//! of the rest of the report.

use std::io;

use thiserror::Error;

/// The error type for the overtime report.
///
/// # Example
///
/// ```
/// use overtime_report::error::ReportError;
///
/// let error = ReportError::FileNotFound {
///     path: "./overtime.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "File not found at ./overtime.csv");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input file does not exist or could not be opened.
    #[error("File not found at {path}")]
    FileNotFound {
        /// The path that could not be opened.
        path: String,
    },

    /// A row has fewer fields than the configured columns require.
    #[error("Delimiter '{delimiter}' not found")]
    DelimiterNotFound {
        /// The configured field delimiter.
        delimiter: char,
    },

    /// A date/time pair did not match the timestamp format.
    #[error("time data '{input}' does not match format '{format}'")]
    Parse {
        /// The combined date and time that failed to parse.
        input: String,
        /// The expected format string.
        format: String,
    },

    /// Any other failure while reading the log or writing the report.
    #[error("Generic Exception\n{message}")]
    Generic {
        /// A description of the underlying failure.
        message: String,
    },
}

impl From<io::Error> for ReportError {
    fn from(error: io::Error) -> Self {
        ReportError::Generic {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ReportError {
    fn from(error: csv::Error) -> Self {
        ReportError::Generic {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
