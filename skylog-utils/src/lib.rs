//! Shared utility functions for skylog crates.

/// Timestamp utility functions
pub mod time {
    use chrono::{DateTime, DurationRound, TimeDelta, Utc};

    /// Timestamp format for sky log rows: RFC 3339 with millisecond
    /// precision, e.g. "2025-06-28T17:52:03.000Z"
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

    /// Format a UTC timestamp as a log-row string.
    pub fn format_timestamp(time: &DateTime<Utc>) -> String {
        time.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Parse a log-row timestamp string back into UTC.
    pub fn parse_timestamp(s: &str) -> anyhow::Result<DateTime<Utc>> {
        Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
    }

    /// Truncate a timestamp to the start of its UTC hour.
    pub fn hour_floor(time: &DateTime<Utc>) -> DateTime<Utc> {
        time.duration_trunc(TimeDelta::hours(1)).unwrap_or(*time)
    }

}
