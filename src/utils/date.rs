//! Calendar helpers. Dates are naive: no time-zone conversion is ever applied.

use chrono::{Datelike, Days, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// English weekday name ("Sunday" .. "Saturday").
pub fn weekday_name(d: NaiveDate) -> String {
    d.format("%A").to_string()
}

/// The Sunday at or before `d`.
pub fn week_start(d: NaiveDate) -> NaiveDate {
    let offset = d.weekday().num_days_from_sunday();
    // only fails at NaiveDate::MIN, where the date itself is the best key left
    d.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(d)
}

/// Long human form, e.g. "January 5, 2025".
pub fn format_long_date(d: NaiveDate) -> String {
    d.format("%B %-d, %Y").to_string()
}

/// Last day of the given month, `None` for an invalid month.
pub fn month_last_day(year: i32, month: u32) -> Option<NaiveDate> {
    let first_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    NaiveDate::from_ymd_opt(year, month, 1)?;
    first_next.pred_opt()
}
