//! Reporting periods scoping a topic's metrics.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A closed UTC time range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ReportingPeriod {
    /// Create a period. Reversed bounds are swapped so that
    /// `start <= end` always holds.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// The trailing period ending now.
    pub fn last_days(days: u32) -> Self {
        let end = Utc::now();
        Self {
            start: end - Duration::days(i64::from(days)),
            end,
        }
    }

    /// Length of the period.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether the timestamp falls within the period (inclusive bounds).
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

impl Default for ReportingPeriod {
    /// The dashboard's default reporting window.
    fn default() -> Self {
        Self::last_days(30)
    }
}
