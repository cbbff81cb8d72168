use crate::core::session::Session;
use crate::db::WorkEntryRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{NewEntry, WorkEntry};
use crate::utils::date::{parse_date, weekday_name};
use crate::utils::time::{parse_optional_time, parse_time};

/// Manual mutations of a session's entries.
///
/// The local collection changes only after the repository has accepted the
/// mutation; any error leaves it exactly as it was.
pub struct EntryEditor<'a, R: WorkEntryRepository + ?Sized> {
    repo: &'a mut R,
    session: &'a mut Session,
}

impl<'a, R: WorkEntryRepository + ?Sized> EntryEditor<'a, R> {
    pub fn new(repo: &'a mut R, session: &'a mut Session) -> Self {
        Self { repo, session }
    }

    /// Add a hand-entered entry for the session's employee.
    ///
    /// Input is fully validated before the repository is contacted.
    pub fn add_custom(
        &mut self,
        date: &str,
        time_in: &str,
        time_out: Option<&str>,
    ) -> AppResult<WorkEntry> {
        if date.trim().is_empty() {
            return Err(AppError::Validation("Date is required.".into()));
        }
        if time_in.trim().is_empty() {
            return Err(AppError::Validation("Clock-in time is required.".into()));
        }

        let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let t_in = parse_time(time_in).ok_or_else(|| AppError::InvalidTime(time_in.to_string()))?;
        let t_out = parse_optional_time(time_out)?;

        // any entry added after an open one would hide it from the next clock-out
        if let Some(open) = self.session.open_entry() {
            return Err(AppError::Validation(format!(
                "Entry #{} is still open; clock out or delete it before adding entries.",
                open.id
            )));
        }

        let new = NewEntry::custom(&self.session.employee().id, d, t_in, t_out);
        let mut entry = self.repo.create_entry(&new)?;

        // advisory only; the next refetch replaces it
        entry.day_of_week = weekday_name(d);
        self.session.entries_mut().push(entry.clone());

        Ok(entry)
    }

    /// Delete one of the session employee's entries.
    pub fn delete(&mut self, entry_id: i64) -> AppResult<()> {
        let employee_id = self.session.employee().id.clone();
        self.repo.delete_entry(&employee_id, entry_id)?;
        self.session.entries_mut().retain(|e| e.id != entry_id);
        Ok(())
    }
}
