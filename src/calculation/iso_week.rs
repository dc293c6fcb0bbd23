//! ISO week detection for bucketing records.

use chrono::{Datelike, NaiveDateTime};

use crate::models::WeekNumber;

/// Returns the ISO-8601 week number of a timestamp.
///
/// Week 1 is the week containing the year's first Thursday, so the last days
/// of December can fall in week 1 and the first days of January in week 52
/// or 53. Only the number is returned: the week-based year is not part of the
/// bucket key.
///
/// # Example
///
/// ```
/// use overtime_report::calculation::{parse_timestamp, week_of};
/// use overtime_report::models::WeekNumber;
///
/// // Tuesday 2019-12-31 belongs to week 1 of 2020.
/// let ts = parse_timestamp("12/31/2019", "09:00", "%m/%d/%Y %H:%M").unwrap();
/// assert_eq!(week_of(ts), WeekNumber::new(1));
/// ```
pub fn week_of(timestamp: NaiveDateTime) -> WeekNumber {
    WeekNumber::new(timestamp.iso_week().week())
}
