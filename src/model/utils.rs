use chrono::{DateTime, Utc};

/// Converts a paced-off putt length into meters.
#[must_use]
pub fn distance_from_steps(steps: f64, stride_length: f64) -> f64 {
    steps * stride_length
}

#[must_use]
pub fn format_percentage(rate: f64) -> String {
    format!("{rate:.1}%")
}

#[must_use]
pub fn format_round_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}
