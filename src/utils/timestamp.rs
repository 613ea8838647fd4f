//! Timestamp formatting for response envelopes and health reports.

use chrono::{DateTime, Local};

/// Format used in `response-timestamp` and `health-check-timestamp`,
/// e.g. `2026/10/15T09:30:12:004512`.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%dT%H:%M:%S:%6f";

pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time in [`TIMESTAMP_FORMAT`].
pub fn current_timestamp() -> String {
    format_timestamp(&Local::now())
}
