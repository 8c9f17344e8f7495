//! Time utilities: parsing HH:MM, millisecond conversions, elapsed formatting.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn minutes_to_ms(minutes: i64) -> i64 {
    minutes * MS_PER_MINUTE
}

pub fn seconds_to_ms(seconds: i64) -> i64 {
    seconds * MS_PER_SECOND
}

/// Format a span in milliseconds as HH:MM:SS. Negative spans read as zero;
/// hours are not wrapped at 24.
pub fn format_elapsed(ms: i64) -> String {
    let total_seconds = ms.max(0) / MS_PER_SECOND;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Validate a user-supplied HH:MM value, keeping the original text.
pub fn validate_optional_time(input: Option<&String>) -> AppResult<Option<String>> {
    if let Some(s) = input {
        parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(s.trim().to_string()))
    } else {
        Ok(None)
    }
}
