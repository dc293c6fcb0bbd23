//! Calculation logic for the overtime report.
//!
//! This module contains the pure functions the report is built from:
//! timestamp parsing, daily overtime calculation, ISO week detection, and
//! rendering of signed overtime as text or as an hours/minutes pair.

mod daily_overtime;
mod iso_week;
mod signed_format;
mod timestamp;

pub use daily_overtime::calculate_overtime;
pub use iso_week::week_of;
pub use signed_format::{format_signed, hours_minutes};
pub use timestamp::parse_timestamp;
