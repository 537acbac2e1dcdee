use chrono::{DateTime, NaiveDate};
use thiserror::Error;

use crate::item::Timestamp;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    Invalid(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

/// Parse a `YYYY-MM-DD` date into a timestamp at midnight UTC.
pub fn parse_date(s: &str) -> Result<Timestamp, DateError> {
    let trimmed = s.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| DateError::Invalid(trimmed.to_string()))?;
    date.and_hms_opt(0, 0, 0)
        .and_then(|dt| dt.and_utc().timestamp_nanos_opt())
        .ok_or_else(|| DateError::OutOfRange(trimmed.to_string()))
}

/// Format a timestamp as a `YYYY-MM-DD` UTC date.
#[must_use]
pub fn format_date(ts: Timestamp) -> String {
    DateTime::from_timestamp_nanos(ts)
        .format("%Y-%m-%d")
        .to_string()
}
