//! Timestamp parsing for attendance records.

use chrono::NaiveDateTime;

use crate::error::{ReportError, ReportResult};

/// Joins a date and a time-of-day and parses them as one timestamp.
///
/// Whitespace inside `time` is stripped first, so `" 09:00 "` and `"09:00"`
/// parse identically. The date is used as given, except that its year must
/// be exactly four ASCII digits; chrono alone would accept `20`, `-2020`
/// or `20201` for `%Y`.
///
/// # Arguments
///
/// * `date` - The date field, e.g. `"01/06/2020"`
/// * `time` - The time field, e.g. `"09:00"`
/// * `format` - chrono format for `"<date> <time>"`, e.g. `"%m/%d/%Y %H:%M"`
///
/// # Errors
///
/// Returns [`ReportError::Parse`] carrying the joined input and the format
/// when the input does not match.
///
/// # Example
///
/// ```
/// use overtime_report::calculation::parse_timestamp;
/// use chrono::{NaiveDate, Timelike};
///
/// let ts = parse_timestamp("01/06/2020", " 9:05 ", "%m/%d/%Y %H:%M").unwrap();
/// assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2020, 1, 6).unwrap());
/// assert_eq!((ts.hour(), ts.minute()), (9, 5));
///
/// let err = parse_timestamp("2020-01-06", "09:00", "%m/%d/%Y %H:%M").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "time data '2020-01-06 09:00' does not match format '%m/%d/%Y %H:%M'"
/// );
/// ```
pub fn parse_timestamp(date: &str, time: &str, format: &str) -> ReportResult<NaiveDateTime> {
    let time: String = time.chars().filter(|c| !c.is_whitespace()).collect();
    let input = format!("{} {}", date, time);

    match NaiveDateTime::parse_from_str(&input, format) {
        Ok(ts) if has_four_digit_year(date) => Ok(ts),
        _ => Err(ReportError::Parse {
            input,
            format: format.to_string(),
        }),
    }
}

/// The year is the last `/`-separated part of the date field.
fn has_four_digit_year(date: &str) -> bool {
    date.rsplit('/')
        .next()
        .map(str::trim_end)
        .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}
