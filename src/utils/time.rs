//! Time utilities: parsing HH:MM, minute offsets since midnight, display
//! formatting for slot listings.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime, Timelike};

/// Parse a canonical zero-padded `HH:MM` wall-clock string.
/// Rejects other shapes ("9:05", "09.05", "09:05:00") rather than
/// guessing.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    if t.len() != 5 || t.as_bytes()[2] != b':' {
        return None;
    }
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Minute offset since midnight for a `NaiveTime`.
pub fn minute_of_day(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

/// `"HH:MM"` → minutes since midnight (0–1439).
pub fn to_minutes(t: &str) -> AppResult<i64> {
    let parsed = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(minute_of_day(parsed))
}

/// Minutes since midnight → zero-padded `"HH:MM"`.
/// Expects offsets in 0..=1439; larger values format arithmetically
/// without wrapping.
pub fn minutes_to_time(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Combine a calendar date with a `"HH:MM"` time and render the 12-hour
/// display string shown to clients, e.g. `"1:45 PM"`.
pub fn format_time_display(date: NaiveDate, time: &str) -> AppResult<String> {
    let t = parse_time(time).ok_or_else(|| AppError::InvalidTime(time.to_string()))?;
    Ok(date.and_time(t).format("%-I:%M %p").to_string())
}
