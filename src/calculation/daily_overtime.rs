//! Daily overtime calculation.
//!
//! Overtime for one record is the time between entry and exit minus the
//! standard working day. The result is signed: a short day produces negative
//! overtime, which offsets longer days in the weekly and total sums.

use chrono::{Duration, NaiveDateTime};

use crate::models::Overtime;

/// Calculates the signed overtime of a single record.
///
/// No clamping is applied and `exit` before `entry` is not rejected; both
/// simply yield a more negative result.
///
/// # Arguments
///
/// * `entry` - When work started
/// * `exit` - When work ended
/// * `working_duration` - The standard working day (9 hours by default)
///
/// # Examples
///
/// ## Exactly the standard day
///
/// ```
/// use overtime_report::calculation::{calculate_overtime, parse_timestamp};
/// use chrono::Duration;
///
/// let entry = parse_timestamp("01/06/2020", "09:00", "%m/%d/%Y %H:%M").unwrap();
/// let exit = parse_timestamp("01/06/2020", "18:00", "%m/%d/%Y %H:%M").unwrap();
///
/// let overtime = calculate_overtime(entry, exit, Duration::hours(9));
/// assert_eq!(overtime.num_seconds(), 0);
/// ```
///
/// ## Leaving early
///
/// ```
/// use overtime_report::calculation::{calculate_overtime, parse_timestamp};
/// use chrono::Duration;
///
/// let entry = parse_timestamp("01/06/2020", "09:00", "%m/%d/%Y %H:%M").unwrap();
/// let exit = parse_timestamp("01/06/2020", "17:00", "%m/%d/%Y %H:%M").unwrap();
///
/// let overtime = calculate_overtime(entry, exit, Duration::hours(9));
/// assert_eq!(overtime.num_seconds(), -3_600);
/// ```
pub fn calculate_overtime(
    entry: NaiveDateTime,
    exit: NaiveDateTime,
    working_duration: Duration,
) -> Overtime {
    let worked = exit - entry;
    Overtime::from_duration(worked - working_duration)
}
