//! Per-day and per-week report results.

use serde::{Deserialize, Serialize};

use super::{Overtime, WeekNumber};

/// The outcome of ingesting one attendance record that was not skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOvertime {
    /// The record's date as read.
    pub date: String,
    /// The record's entry time as read.
    pub entry: String,
    /// The record's exit time as read.
    pub exit: String,
    /// The ISO week the record was bucketed into.
    pub week: WeekNumber,
    /// Worked time minus the standard working day.
    pub overtime: Overtime,
}

/// The accumulated overtime of one ISO week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyOvertime {
    /// The week.
    pub week: WeekNumber,
    /// Sum of the daily overtime of every record in the week.
    pub overtime: Overtime,
}
