use crate::models::WorkEntry;
use serde::Serialize;

/// Flat row for CSV / JSON exports, one per entry.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    pub employee_id: String,
    pub employee_name: String,
    pub date: String,
    pub day_of_week: String,
    pub time_in: String,
    pub time_out: Option<String>,
    pub source: String,
}

impl EntryExport {
    pub fn from_entry(entry: &WorkEntry, employee_name: Option<&str>) -> Self {
        Self {
            id: entry.id,
            employee_id: entry.employee_id.clone(),
            employee_name: employee_name.unwrap_or_default().to_string(),
            date: entry.date_str(),
            day_of_week: entry.day_of_week.clone(),
            time_in: entry.time_in_str(),
            time_out: entry.time_out_str(),
            source: entry.source.to_db_str().to_string(),
        }
    }
}
