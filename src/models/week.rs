//! ISO week number.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ISO-8601 week number (1 to 53).
///
/// Ordered numerically and displayed zero-padded to two digits, which is how
/// the weekly report labels its buckets.
///
/// # Example
///
/// ```
/// use overtime_report::models::WeekNumber;
///
/// assert_eq!(WeekNumber::new(3).to_string(), "03");
/// assert!(WeekNumber::new(9) < WeekNumber::new(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekNumber(u32);

impl WeekNumber {
    /// Wraps a week number.
    pub fn new(week: u32) -> Self {
        Self(week)
    }

    /// Returns the week number.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WeekNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:02}", self.0))
    }
}
