//! The record-store contract consumed by the core, and its SQLite backend.

use crate::db::initialize::init_db;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::{employees, queries};
use crate::errors::{AppError, AppResult};
use crate::models::{Employee, NewEntry, WorkEntry};
use crate::utils::time::format_db_time;
use chrono::NaiveTime;

/// CRUD surface the core needs from the record store.
///
/// Every call blocks until the store answers. Implementations report a
/// missing target with `EmployeeNotFound` / `EntryNotFound` and any failure
/// to reach the store as `Transport`.
pub trait WorkEntryRepository {
    /// Entries of one employee in creation order.
    fn list_entries(&self, employee_id: &str) -> AppResult<Vec<WorkEntry>>;

    /// Store a new entry; the repository assigns its id.
    fn create_entry(&mut self, new: &NewEntry) -> AppResult<WorkEntry>;

    /// Set the time-out of an open entry.
    fn close_open_entry(&mut self, entry_id: i64, time_out: NaiveTime) -> AppResult<WorkEntry>;

    /// Delete an entry belonging to `employee_id`.
    fn delete_entry(&mut self, employee_id: &str, entry_id: i64) -> AppResult<()>;

    fn get_employee(&self, employee_id: &str) -> AppResult<Option<Employee>>;
}

pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    /// Open the database at `path`, applying pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }

    // ------------------------------------------------
    // Employee registry (outside the core contract)
    // ------------------------------------------------

    pub fn add_employee(&mut self, emp: &Employee) -> AppResult<()> {
        if employees::load_employee(&self.pool.conn, &emp.id)?.is_some() {
            return Err(AppError::Validation(format!(
                "Employee ID already exists: {}",
                emp.id
            )));
        }

        employees::insert_employee(&self.pool.conn, emp)?;
        ttlog_quiet(
            &self.pool.conn,
            "employee_add",
            &emp.id,
            &format!("Added employee {}", emp.label()),
        );
        Ok(())
    }

    pub fn remove_employee(&mut self, employee_id: &str) -> AppResult<()> {
        if employees::delete_employee(&self.pool.conn, employee_id)? == 0 {
            return Err(AppError::EmployeeNotFound(employee_id.to_string()));
        }

        ttlog_quiet(
            &self.pool.conn,
            "employee_del",
            employee_id,
            "Deleted employee and their entries",
        );
        Ok(())
    }

    pub fn list_employees(&self) -> AppResult<Vec<(Employee, i64)>> {
        employees::list_employees(&self.pool.conn)
    }

    /// Entries of every employee with the employee's display name.
    pub fn list_all_entries(&self) -> AppResult<Vec<(WorkEntry, Option<String>)>> {
        queries::load_all_entries(&self.pool.conn)
    }
}

impl WorkEntryRepository for SqliteRepository {
    fn list_entries(&self, employee_id: &str) -> AppResult<Vec<WorkEntry>> {
        queries::load_entries_for(&self.pool.conn, employee_id)
    }

    fn create_entry(&mut self, new: &NewEntry) -> AppResult<WorkEntry> {
        if employees::load_employee(&self.pool.conn, &new.employee_id)?.is_none() {
            return Err(AppError::EmployeeNotFound(new.employee_id.clone()));
        }

        let entry = queries::insert_entry(&self.pool.conn, new)?;

        let (operation, message) = if new.source.is_custom() {
            ("add", format!("Custom entry for {}", entry.date_str()))
        } else {
            ("clock_in", format!("Clocked in at {}", entry.time_in_str()))
        };
        ttlog_quiet(
            &self.pool.conn,
            operation,
            &format!("#{} {}", entry.id, entry.employee_id),
            &message,
        );

        Ok(entry)
    }

    fn close_open_entry(&mut self, entry_id: i64, time_out: NaiveTime) -> AppResult<WorkEntry> {
        if queries::close_entry(&self.pool.conn, entry_id, time_out)? == 0 {
            return match queries::load_entry(&self.pool.conn, entry_id)? {
                None => Err(AppError::EntryNotFound(entry_id)),
                Some(_) => Err(AppError::Validation(format!(
                    "Entry #{} is already closed.",
                    entry_id
                ))),
            };
        }

        let entry = queries::load_entry(&self.pool.conn, entry_id)?
            .ok_or(AppError::EntryNotFound(entry_id))?;

        ttlog_quiet(
            &self.pool.conn,
            "clock_out",
            &format!("#{} {}", entry.id, entry.employee_id),
            &format!("Clocked out at {}", format_db_time(time_out)),
        );

        Ok(entry)
    }

    fn delete_entry(&mut self, employee_id: &str, entry_id: i64) -> AppResult<()> {
        if queries::delete_entry(&self.pool.conn, employee_id, entry_id)? == 0 {
            return Err(AppError::EntryNotFound(entry_id));
        }

        ttlog_quiet(
            &self.pool.conn,
            "del",
            &format!("#{} {}", entry_id, employee_id),
            "Deleted entry",
        );
        Ok(())
    }

    fn get_employee(&self, employee_id: &str) -> AppResult<Option<Employee>> {
        employees::load_employee(&self.pool.conn, employee_id)
    }
}
