//! Timestamp formatting for receipts and logs.

use chrono::{Local, TimeZone, Utc};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a unix timestamp as `YYYY-mm-dd HH:MM:SS` in local time.
/// Out of range timestamps fall back to the epoch.
pub fn format_timestamp(secs: i64) -> String {
    Local
        .timestamp_opt(secs, 0)
        .single()
        .unwrap_or_default()
        .format(DATETIME_FORMAT)
        .to_string()
}

/// Same format as [`format_timestamp`] but in UTC.
pub fn format_timestamp_utc(secs: i64) -> String {
    Utc.timestamp_opt(secs, 0)
        .single()
        .unwrap_or_default()
        .format(DATETIME_FORMAT)
        .to_string()
}
