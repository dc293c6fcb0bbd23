//! Core data models for the overtime report.
//!
//! This module contains the values passed between the parser, the
//! calculator and the report: input records, signed overtime durations,
//! ISO week numbers and the per-day and per-week results.

mod overtime;
mod record;
mod summary;
mod week;

pub use overtime::Overtime;
pub use record::AttendanceRecord;
pub use summary::{DailyOvertime, WeeklyOvertime};
pub use week::WeekNumber;
