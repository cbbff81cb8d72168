//! Time utilities: parsing HH:MM[:SS], wall-clock formatting, durations.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// Accepts `HH:MM` or `HH:MM:SS`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn parse_optional_time(input: Option<&str>) -> AppResult<Option<NaiveTime>> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_time(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidTime(s.to_string())),
    }
}

/// Storage form, always with seconds.
pub fn format_db_time(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}

/// 12-hour display with AM/PM at minute precision, e.g. "9:05 AM".
pub fn format_clock_time(t: NaiveTime) -> String {
    t.format("%-I:%M %p").to_string()
}

/// Drop sub-second precision so stored punches round-trip exactly.
pub fn truncate_to_seconds(t: NaiveTime) -> NaiveTime {
    t.with_nanosecond(0).unwrap_or(t)
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}
