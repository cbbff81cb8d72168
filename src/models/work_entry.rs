use super::entry_source::EntrySource;
use crate::utils::date::weekday_name;
use crate::utils::time::{format_db_time, minutes_between};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkEntry {
    pub id: i64,                     // ⇔ work_entries.id (assigned by the store)
    pub employee_id: String,         // ⇔ work_entries.employee_id
    pub date: NaiveDate,             // ⇔ work_entries.date (TEXT "YYYY-MM-DD")
    pub day_of_week: String,         // ⇔ work_entries.day_of_week (advisory)
    pub time_in: NaiveTime,          // ⇔ work_entries.time_in (TEXT "HH:MM:SS")
    pub time_out: Option<NaiveTime>, // ⇔ work_entries.time_out (NULL = still clocked in)
    pub source: EntrySource,         // ⇔ work_entries.source ('clock' | 'custom')
}

impl WorkEntry {
    /// An entry without a time-out: the employee is still clocked in.
    pub fn is_open(&self) -> bool {
        self.time_out.is_none()
    }

    /// Weekday recomputed from the date; the stored label is only a hint.
    pub fn weekday(&self) -> String {
        weekday_name(self.date)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_in_str(&self) -> String {
        format_db_time(self.time_in)
    }

    pub fn time_out_str(&self) -> Option<String> {
        self.time_out.map(format_db_time)
    }

    /// Minutes between time-in and time-out, `None` while the entry is open.
    /// A time-out earlier than the time-in is read as crossing midnight.
    pub fn worked_minutes(&self) -> Option<i64> {
        let out = self.time_out?;
        let mins = minutes_between(self.time_in, out);
        Some(if mins < 0 { mins + 24 * 60 } else { mins })
    }
}

/// Creation request for the repository; it has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub employee_id: String,
    pub date: NaiveDate,
    pub time_in: NaiveTime,
    pub time_out: Option<NaiveTime>,
    pub source: EntrySource,
}

impl NewEntry {
    /// A punch taken at the given wall-clock moment; time-out stays open.
    pub fn punch(employee_id: &str, date: NaiveDate, time_in: NaiveTime) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            date,
            time_in,
            time_out: None,
            source: EntrySource::Clock,
        }
    }

    pub fn custom(
        employee_id: &str,
        date: NaiveDate,
        time_in: NaiveTime,
        time_out: Option<NaiveTime>,
    ) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            date,
            time_in,
            time_out,
            source: EntrySource::Custom,
        }
    }

    pub fn day_of_week(&self) -> String {
        weekday_name(self.date)
    }
}
