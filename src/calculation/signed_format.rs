//! Rendering of signed overtime.
//!
//! A duration is first split into whole days and a non-negative
//! time-of-day remainder (`0 <= seconds < 86400`), so `-1h` becomes
//! `-1 day + 23h`. The two renderings then work on that split:
//!
//! - Non-negative durations print `+H:M` with the hours counted across days.
//! - Negative durations print `-H:M` from the time-of-day part of
//!   `1 day - duration`. For anything shorter than a day this is the
//!   magnitude (`-1h` prints `-1:0`). Whole days are dropped, so `-25h` also
//!   prints `-1:0` and `-24h` prints `-0:0`.
//!
//! [`hours_minutes`] always uses the non-negative split, whatever the sign.
//! Minutes are never zero-padded.

use crate::models::Overtime;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;

/// Splits signed seconds into whole days (rounded down) and the remaining
/// non-negative seconds of the day.
fn split_days(total_seconds: i64) -> (i64, i64) {
    (
        total_seconds.div_euclid(SECONDS_PER_DAY),
        total_seconds.rem_euclid(SECONDS_PER_DAY),
    )
}

fn minute_of_hour(day_seconds: i64) -> i64 {
    day_seconds / SECONDS_PER_MINUTE % 60
}

/// Formats overtime as a signed `H:M` string.
///
/// # Examples
///
/// ```
/// use overtime_report::calculation::format_signed;
/// use overtime_report::models::Overtime;
///
/// assert_eq!(format_signed(Overtime::zero()), "+0:0");
/// assert_eq!(format_signed(Overtime::from_seconds(5_400)), "+1:30");
/// assert_eq!(format_signed(Overtime::from_seconds(-3_600)), "-1:0");
/// assert_eq!(format_signed(Overtime::from_seconds(30 * 3_600)), "+30:0");
/// ```
pub fn format_signed(overtime: Overtime) -> String {
    let total = overtime.num_seconds();
    let (days, _) = split_days(total);

    if days <= -1 {
        format_minus(total)
    } else {
        format_plus(total)
    }
}

fn format_minus(total: i64) -> String {
    let (_, seconds) = split_days(SECONDS_PER_DAY - total);
    format!(
        "-{}:{}",
        seconds / SECONDS_PER_HOUR,
        minute_of_hour(seconds)
    )
}

fn format_plus(total: i64) -> String {
    let (hours, minutes) = split_hours_minutes(total);
    format!("+{}:{}", hours, minutes)
}

fn split_hours_minutes(total: i64) -> (i64, i64) {
    let (_, seconds) = split_days(total);
    (total.div_euclid(SECONDS_PER_HOUR), minute_of_hour(seconds))
}

/// Splits overtime into whole hours (rounded down) and minute-of-hour.
///
/// Used for the grand total. Negative values keep the rounded-down hour and
/// a positive minute, so `-30m` is `(-1, 30)`.
///
/// # Example
///
/// ```
/// use overtime_report::calculation::hours_minutes;
/// use overtime_report::models::Overtime;
///
/// assert_eq!(hours_minutes(Overtime::from_seconds(6_300)), (1, 45));
/// assert_eq!(hours_minutes(Overtime::from_seconds(-1_800)), (-1, 30));
/// ```
pub fn hours_minutes(overtime: Overtime) -> (i64, i64) {
    split_hours_minutes(overtime.num_seconds())
}
