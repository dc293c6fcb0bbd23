//! Fixed configuration for the overtime report.
//!
//! The report has no runtime configuration: every setting is a constant in
//! [`defaults`], collected into a [`ReportConfig`] by its `Default` impl. The
//! library functions take a `&ReportConfig` so callers other than the binary
//! can point a run at a different file.
//!
//! # Example
//!
//! ```
//! use overtime_report::config::ReportConfig;
//!
//! let config = ReportConfig::default();
//! assert_eq!(config.csv_file.to_str(), Some("./overtime.csv"));
//! assert_eq!(config.working_hours, 9);
//! ```

pub mod defaults;
mod types;

pub use types::ReportConfig;
