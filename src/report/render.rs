//! Console layout of the report.
//!
//! Every function writes complete lines to the sink. Padding is left-aligned
//! and never truncates.

use std::io::Write;

use crate::calculation::hours_minutes;
use crate::error::ReportResult;
use crate::models::{DailyOvertime, Overtime, WeeklyOvertime};

/// Title of the daily section.
pub const DAILY_TITLE: &str = "Daily Overtime";
/// Width of the daily section's banner and border.
pub const DAILY_WIDTH: usize = 61;
/// Title of the weekly section.
pub const WEEKLY_TITLE: &str = "Weekly Report";
/// Width of the weekly section's banner and border.
pub const WEEKLY_WIDTH: usize = 24;
/// Title of the total section.
pub const TOTAL_TITLE: &str = "Total Overtime";
/// Width of the total section's banner and border.
pub const TOTAL_WIDTH: usize = 22;

/// Centers `text` in `width` columns.
///
/// When the fill cannot be split evenly the extra space goes on the left if
/// both the fill and the width are odd, otherwise on the right. Text wider
/// than `width` is returned unchanged.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Writes a row of `width` dashes.
pub fn write_border<W: Write>(out: &mut W, width: usize) -> ReportResult<()> {
    writeln!(out, "{}", "-".repeat(width))?;
    Ok(())
}

/// Writes a section banner: border, centered title, border.
pub fn write_header<W: Write>(out: &mut W, title: &str, width: usize) -> ReportResult<()> {
    write_border(out, width)?;
    writeln!(out, "{}", center(title, width))?;
    write_border(out, width)
}

/// Writes one line of the daily section.
pub fn write_daily_line<W: Write>(out: &mut W, daily: &DailyOvertime) -> ReportResult<()> {
    writeln!(
        out,
        "Date: {:<10}, Start: {:<5}, End: {:<5}, Overtime: {:<6}",
        daily.date,
        daily.entry,
        daily.exit,
        daily.overtime
    )?;
    Ok(())
}

/// Writes one line of the weekly section.
pub fn write_weekly_line<W: Write>(out: &mut W, weekly: &WeeklyOvertime) -> ReportResult<()> {
    writeln!(out, "Week {:<3} Overtime: {:<6}", weekly.week, weekly.overtime)?;
    Ok(())
}

/// Writes the grand total as whole hours and minute-of-hour.
pub fn write_total_line<W: Write>(out: &mut W, total: Overtime) -> ReportResult<()> {
    let (hours, minutes) = hours_minutes(total);
    writeln!(out, "Hours: {:<3} Minutes: {:<3}", hours, minutes)?;
    Ok(())
}
