use crate::errors::{AppError, AppResult};
use crate::models::{EntrySource, NewEntry, WorkEntry};
use crate::utils::time::{format_db_time, parse_time};
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const ENTRY_COLUMNS: &str = "id, employee_id, date, day_of_week, time_in, time_out, source";

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

fn column_time(col: usize, raw: &str) -> Result<NaiveTime> {
    parse_time(raw).ok_or_else(|| conversion_error(col, AppError::InvalidTime(raw.to_string())))
}

pub fn map_row(row: &Row) -> Result<WorkEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(2, AppError::InvalidDate(date_str.clone())))?;

    let time_in_str: String = row.get("time_in")?;
    let time_in = column_time(4, &time_in_str)?;

    let time_out = match row.get::<_, Option<String>>("time_out")? {
        Some(s) => Some(column_time(5, &s)?),
        None => None,
    };

    let source_str: String = row.get("source")?;
    let source = EntrySource::from_db_str(&source_str).ok_or_else(|| {
        conversion_error(
            6,
            AppError::Validation(format!("Invalid entry source: {}", source_str)),
        )
    })?;

    Ok(WorkEntry {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        date,
        day_of_week: row.get("day_of_week")?,
        time_in,
        time_out,
        source,
    })
}

/// Entries of one employee in creation order.
pub fn load_entries_for(conn: &Connection, employee_id: &str) -> AppResult<Vec<WorkEntry>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ENTRY_COLUMNS} FROM work_entries
         WHERE employee_id = ?1
         ORDER BY id ASC"
    ))?;

    let rows = stmt.query_map([employee_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every entry with its employee's display name, in creation order.
pub fn load_all_entries(conn: &Connection) -> AppResult<Vec<(WorkEntry, Option<String>)>> {
    let mut stmt = conn.prepare(
        "SELECT w.id, w.employee_id, w.date, w.day_of_week, w.time_in, w.time_out, w.source,
                e.name AS employee_name
         FROM work_entries w
         JOIN employees e ON e.id = w.employee_id
         ORDER BY w.id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        let entry = map_row(row)?;
        let name: Option<String> = row.get("employee_name")?;
        Ok((entry, name))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Option<WorkEntry>> {
    let entry = conn
        .query_row(
            &format!("SELECT {ENTRY_COLUMNS} FROM work_entries WHERE id = ?1"),
            [id],
            map_row,
        )
        .optional()?;
    Ok(entry)
}

/// Insert a new entry and return it with the id assigned by SQLite.
pub fn insert_entry(conn: &Connection, new: &NewEntry) -> AppResult<WorkEntry> {
    let day_of_week = new.day_of_week();

    conn.execute(
        "INSERT INTO work_entries (employee_id, date, day_of_week, time_in, time_out, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            new.employee_id,
            new.date.format("%Y-%m-%d").to_string(),
            day_of_week,
            format_db_time(new.time_in),
            new.time_out.map(format_db_time),
            new.source.to_db_str(),
            Local::now().to_rfc3339(),
        ],
    )?;

    Ok(WorkEntry {
        id: conn.last_insert_rowid(),
        employee_id: new.employee_id.clone(),
        date: new.date,
        day_of_week,
        time_in: new.time_in,
        time_out: new.time_out,
        source: new.source,
    })
}

/// Set the time-out of an entry that is still open.
/// Returns the number of rows touched (0 if missing or already closed).
pub fn close_entry(conn: &Connection, id: i64, time_out: NaiveTime) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE work_entries SET time_out = ?1 WHERE id = ?2 AND time_out IS NULL",
        params![format_db_time(time_out), id],
    )?;
    Ok(n)
}

/// Delete an entry owned by `employee_id`; returns the number of rows removed.
pub fn delete_entry(conn: &Connection, employee_id: &str, id: i64) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM work_entries WHERE id = ?1 AND employee_id = ?2",
        params![id, employee_id],
    )?;
    Ok(n)
}
