use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Round;

/// Lookback window ending at an injected "now". Callers always pass the
/// clock in; nothing in the engine reads it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
    Year,
    #[default]
    All,
}

impl Period {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "week" => Some(Period::Week),
            "month" => Some(Period::Month),
            "year" => Some(Period::Year),
            "all" => Some(Period::All),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
            Period::All => "all",
        }
    }

    /// Start of the window, or `None` when the period is unbounded.
    /// Month and year subtraction is calendar-aware; the day of month
    /// clamps when the target month is shorter.
    #[must_use]
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Period::Week => Some(now - Duration::days(7)),
            Period::Month => now.checked_sub_months(Months::new(1)),
            Period::Year => now.checked_sub_months(Months::new(12)),
            Period::All => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keeps rounds dated on or after the period cutoff. A round exactly at
/// the cutoff stays in.
#[must_use]
pub fn filter_rounds_by_period(
    mut rounds: Vec<Round>,
    period: Period,
    now: DateTime<Utc>,
) -> Vec<Round> {
    if let Some(cutoff) = period.cutoff(now) {
        rounds.retain(|round| round.date >= cutoff);
    }
    rounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_accepts_known_periods_only() {
        assert_eq!(Period::parse("week"), Some(Period::Week));
        assert_eq!(Period::parse("all"), Some(Period::All));
        assert_eq!(Period::parse("fortnight"), None);
        assert_eq!(Period::parse("Week"), None);
    }

    #[test]
    fn month_cutoff_clamps_short_months() {
        let now = Utc.with_ymd_and_hms(2026, 3, 31, 12, 0, 0).unwrap();
        let cutoff = Period::Month.cutoff(now).unwrap();
        assert_eq!(cutoff, Utc.with_ymd_and_hms(2026, 2, 28, 12, 0, 0).unwrap());
    }

    #[test]
    fn year_cutoff_handles_leap_day() {
        let now = Utc.with_ymd_and_hms(2028, 2, 29, 0, 0, 0).unwrap();
        let cutoff = Period::Year.cutoff(now).unwrap();
        assert_eq!(cutoff, Utc.with_ymd_and_hms(2027, 2, 28, 0, 0, 0).unwrap());
    }
}
