//! Week-bucketed overtime accumulation.

use std::collections::BTreeMap;

use chrono::Duration;
use tracing::debug;

use crate::calculation::{calculate_overtime, parse_timestamp, week_of};
use crate::config::ReportConfig;
use crate::error::ReportResult;
use crate::models::{AttendanceRecord, DailyOvertime, Overtime, WeekNumber, WeeklyOvertime};

/// Running totals for one pass over an attendance log.
///
/// Owns the per-week buckets and the grand total. Buckets are created on the
/// first record of their week and never removed.
///
/// # Example
///
/// ```
/// use overtime_report::config::ReportConfig;
/// use overtime_report::models::AttendanceRecord;
/// use overtime_report::report::OvertimeAccumulator;
///
/// let mut acc = OvertimeAccumulator::new(&ReportConfig::default());
/// acc.ingest(&AttendanceRecord::new("01/06/2020", "09:00", "19:30")).unwrap();
/// acc.ingest(&AttendanceRecord::new("01/07/2020", "09:00", "17:00")).unwrap();
///
/// assert_eq!(acc.total().to_string(), "+0:30");
/// assert_eq!(acc.weekly().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct OvertimeAccumulator {
    datetime_format: String,
    working_duration: Duration,
    weeks: BTreeMap<WeekNumber, Overtime>,
    total: Overtime,
}

impl OvertimeAccumulator {
    /// Creates an empty accumulator using the format and working day of
    /// `config`.
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            datetime_format: config.datetime_format.clone(),
            working_duration: config.working_duration(),
            weeks: BTreeMap::new(),
            total: Overtime::zero(),
        }
    }

    /// Adds one record to its week bucket and to the grand total.
    ///
    /// Returns `Ok(None)` without touching any total when entry and exit
    /// parse to the same instant.
    ///
    /// # Errors
    ///
    /// Returns a parse error if either timestamp does not match the format.
    /// Nothing is accumulated in that case.
    pub fn ingest(&mut self, record: &AttendanceRecord) -> ReportResult<Option<DailyOvertime>> {
        let entry = parse_timestamp(&record.date, &record.entry, &self.datetime_format)?;
        let exit = parse_timestamp(&record.date, &record.exit, &self.datetime_format)?;
        let week = week_of(entry);

        if entry == exit {
            debug!(date = %record.date, "Skipping record with equal entry and exit");
            return Ok(None);
        }

        let overtime = calculate_overtime(entry, exit, self.working_duration);
        self.total += overtime;
        *self.weeks.entry(week).or_insert_with(|| {
            debug!(week = %week, "Opening week bucket");
            Overtime::zero()
        }) += overtime;

        debug!(
            date = %record.date,
            week = %week,
            overtime_seconds = overtime.num_seconds(),
            "Ingested record"
        );

        Ok(Some(DailyOvertime {
            date: record.date.clone(),
            entry: record.entry.clone(),
            exit: record.exit.clone(),
            week,
            overtime,
        }))
    }

    /// Returns the accumulated overtime of every week seen, in ascending
    /// week order.
    pub fn weekly(&self) -> Vec<WeeklyOvertime> {
        self.weeks
            .iter()
            .map(|(&week, &overtime)| WeeklyOvertime { week, overtime })
            .collect()
    }

    /// Returns the accumulated overtime of one week, if any record fell in it.
    pub fn week(&self, week: WeekNumber) -> Option<Overtime> {
        self.weeks.get(&week).copied()
    }

    /// Returns the grand total across all ingested records.
    pub fn total(&self) -> Overtime {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use proptest::prelude::*;

    fn accumulator() -> OvertimeAccumulator {
        OvertimeAccumulator::new(&ReportConfig::default())
    }

    fn record(date: &str, entry: &str, exit: &str) -> AttendanceRecord {
        AttendanceRecord::new(date, entry, exit)
    }

    // ==========================================================================
    // Single records
    // ==========================================================================

    #[test]
    fn test_ingest_returns_daily_overtime() {
        let mut acc = accumulator();

        let daily = acc
            .ingest(&record("01/06/2020", "09:00", "19:30"))
            .unwrap()
            .unwrap();

        assert_eq!(daily.date, "01/06/2020");
        assert_eq!(daily.week, WeekNumber::new(2));
        assert_eq!(daily.overtime, Overtime::from_seconds(5_400));
        assert_eq!(daily.overtime.to_string(), "+1:30");
    }

    #[test]
    fn test_ingest_keeps_raw_time_fields() {
        let mut acc = accumulator();

        let daily = acc
            .ingest(&record("01/06/2020", " 09:00 ", "18:00"))
            .unwrap()
            .unwrap();

        assert_eq!(daily.entry, " 09:00 ");
        assert_eq!(daily.overtime, Overtime::zero());
    }

    #[test]
    fn test_equal_entry_and_exit_is_skipped() {
        let mut acc = accumulator();

        let daily = acc.ingest(&record("01/06/2020", "09:00", " 09:00")).unwrap();

        assert!(daily.is_none());
        assert_eq!(acc.total(), Overtime::zero());
        assert!(acc.weekly().is_empty());
        assert_eq!(acc.week(WeekNumber::new(2)), None);
    }

    #[test]
    fn test_parse_error_accumulates_nothing() {
        let mut acc = accumulator();

        let err = acc.ingest(&record("01/06/2020", "09:00", "6pm")).unwrap_err();

        assert!(matches!(err, ReportError::Parse { .. }));
        assert_eq!(acc.total(), Overtime::zero());
        assert!(acc.weekly().is_empty());
    }

    #[test]
    fn test_custom_working_hours() {
        let config = ReportConfig {
            working_hours: 8,
            ..ReportConfig::default()
        };
        let mut acc = OvertimeAccumulator::new(&config);

        acc.ingest(&record("01/06/2020", "09:00", "17:00")).unwrap();

        assert_eq!(acc.total(), Overtime::zero());
    }

    // ==========================================================================
    // Week buckets
    // ==========================================================================

    #[test]
    fn test_same_week_accumulates_into_one_bucket() {
        let mut acc = accumulator();
        acc.ingest(&record("01/06/2020", "09:00", "19:30")).unwrap();
        acc.ingest(&record("01/08/2020", "09:00", "17:00")).unwrap();

        assert_eq!(
            acc.weekly(),
            vec![WeeklyOvertime {
                week: WeekNumber::new(2),
                overtime: Overtime::from_seconds(1_800),
            }]
        );
    }

    #[test]
    fn test_year_boundary_shares_a_bucket() {
        let mut acc = accumulator();
        acc.ingest(&record("12/31/2019", "09:00", "17:00")).unwrap();
        acc.ingest(&record("01/02/2020", "08:00", "18:15")).unwrap();

        let weekly = acc.weekly();
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].week, WeekNumber::new(1));
        assert_eq!(weekly[0].overtime.to_string(), "+0:15");
    }

    #[test]
    fn test_weeks_are_ascending_regardless_of_input_order() {
        let mut acc = accumulator();
        acc.ingest(&record("03/02/2020", "09:00", "18:30")).unwrap(); // week 10
        acc.ingest(&record("01/13/2020", "09:00", "18:10")).unwrap(); // week 3
        acc.ingest(&record("02/24/2020", "09:00", "18:20")).unwrap(); // week 9

        let weeks: Vec<u32> = acc.weekly().iter().map(|w| w.week.get()).collect();
        assert_eq!(weeks, vec![3, 9, 10]);
    }

    #[test]
    fn test_week_lookup() {
        let mut acc = accumulator();
        acc.ingest(&record("01/06/2020", "09:00", "17:30")).unwrap();

        assert_eq!(acc.week(WeekNumber::new(2)), Some(Overtime::from_seconds(-1_800)));
        assert_eq!(acc.week(WeekNumber::new(3)), None);
    }

    #[test]
    fn test_total_spans_weeks() {
        let mut acc = accumulator();
        acc.ingest(&record("01/06/2020", "09:00", "19:00")).unwrap();
        acc.ingest(&record("01/13/2020", "09:00", "19:00")).unwrap();
        acc.ingest(&record("01/20/2020", "09:00", "16:00")).unwrap();

        assert_eq!(acc.total(), Overtime::zero());
        assert_eq!(acc.weekly().len(), 3);
    }

    proptest! {
        #[test]
        fn prop_total_is_sum_of_weeks(
            days in proptest::collection::vec((1u32..=28, 0u32..12, 0u32..24 * 60), 0..40)
        ) {
            let mut acc = accumulator();
            for (day, month, worked) in days {
                let exit = 6 * 60 + worked.min(17 * 60 + 59);
                let rec = record(
                    &format!("{:02}/{:02}/2021", month + 1, day),
                    "06:00",
                    &format!("{:02}:{:02}", exit / 60, exit % 60),
                );
                acc.ingest(&rec).unwrap();
            }

            let weekly_sum: Overtime = acc.weekly().iter().map(|w| w.overtime).sum();
            prop_assert_eq!(weekly_sum, acc.total());
        }
    }
}
