//! Signed overtime duration.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::calculation::format_signed;

/// A signed span of time worked beyond (positive) or short of (negative)
/// the standard working day.
///
/// Serialized as whole seconds. `Display` renders the report's `±H:M` form.
///
/// # Example
///
/// ```
/// use overtime_report::models::Overtime;
///
/// let monday = Overtime::from_seconds(5_400);
/// let tuesday = Overtime::from_seconds(-3_600);
/// let week: Overtime = [monday, tuesday].into_iter().sum();
///
/// assert_eq!(week.num_seconds(), 1_800);
/// assert_eq!(week.to_string(), "+0:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub struct Overtime(Duration);

impl Overtime {
    /// An overtime of zero, the starting value of every bucket.
    pub fn zero() -> Self {
        Self(Duration::zero())
    }

    /// Wraps a chrono duration.
    pub fn from_duration(duration: Duration) -> Self {
        Self(duration)
    }

    /// Builds an overtime from signed whole seconds.
    ///
    /// # Panics
    ///
    /// Panics if `seconds` is outside chrono's representable range, which is
    /// roughly ±292 million years.
    pub fn from_seconds(seconds: i64) -> Self {
        Self(Duration::seconds(seconds))
    }

    /// Returns the signed number of whole seconds.
    pub fn num_seconds(&self) -> i64 {
        self.0.num_seconds()
    }

    /// Returns true when less than the standard day was worked.
    pub fn is_negative(&self) -> bool {
        self.0 < Duration::zero()
    }
}

impl Default for Overtime {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Overtime {
    type Output = Overtime;

    fn add(self, rhs: Overtime) -> Overtime {
        Overtime(self.0 + rhs.0)
    }
}

impl AddAssign for Overtime {
    fn add_assign(&mut self, rhs: Overtime) {
        self.0 = self.0 + rhs.0;
    }
}

impl Sum for Overtime {
    fn sum<I: Iterator<Item = Overtime>>(iter: I) -> Self {
        iter.fold(Overtime::zero(), Add::add)
    }
}

impl fmt::Display for Overtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_signed(*self))
    }
}

impl From<Overtime> for i64 {
    fn from(overtime: Overtime) -> i64 {
        overtime.num_seconds()
    }
}

impl TryFrom<i64> for Overtime {
    type Error = String;

    fn try_from(seconds: i64) -> Result<Self, Self::Error> {
        Duration::try_seconds(seconds)
            .map(Overtime)
            .ok_or_else(|| format!("{} seconds is out of range for an overtime", seconds))
    }
}
