//! Per-action context: who is acting and the entries last fetched for them.

use crate::core::resolver::ClockStateResolver;
use crate::core::weeks::{Report, WeekAggregator};
use crate::db::WorkEntryRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{ClockState, Employee, WorkEntry};
use crate::utils::range::DateRange;

#[derive(Debug)]
pub struct Session {
    employee: Employee,
    entries: Vec<WorkEntry>,
}

impl Session {
    /// Look the employee up and fetch their entries.
    pub fn open<R>(repo: &R, employee_id: &str) -> AppResult<Self>
    where
        R: WorkEntryRepository + ?Sized,
    {
        let id = employee_id.trim();
        if id.is_empty() {
            return Err(AppError::Validation("Employee ID is required.".into()));
        }

        let employee = repo
            .get_employee(id)?
            .ok_or_else(|| AppError::EmployeeNotFound(id.to_string()))?;
        let entries = repo.list_entries(&employee.id)?;

        Ok(Self { employee, entries })
    }

    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    pub fn entries(&self) -> &[WorkEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<WorkEntry> {
        &mut self.entries
    }

    /// Replace the local entries with the repository's; on failure the
    /// previous entries are kept.
    pub fn refresh<R>(&mut self, repo: &R) -> AppResult<()>
    where
        R: WorkEntryRepository + ?Sized,
    {
        self.entries = repo.list_entries(&self.employee.id)?;
        Ok(())
    }

    pub fn clock_state(&self) -> ClockState {
        ClockStateResolver::resolve(&self.entries)
    }

    /// First entry without a time-out, if any.
    pub fn open_entry(&self) -> Option<&WorkEntry> {
        self.entries.iter().find(|e| e.is_open())
    }

    pub fn report(&self) -> Report {
        WeekAggregator::group_by_week(&self.entries)
    }

    /// Report over the entries whose date falls in `range`, input order kept.
    pub fn report_in(&self, range: Option<&DateRange>) -> Report {
        match range {
            None => self.report(),
            Some(r) => {
                let selected: Vec<WorkEntry> = self
                    .entries
                    .iter()
                    .filter(|e| r.contains(e.date))
                    .cloned()
                    .collect();
                WeekAggregator::group_by_week(&selected)
            }
        }
    }
}
