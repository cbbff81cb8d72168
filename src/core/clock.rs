use crate::core::session::Session;
use crate::db::WorkEntryRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{ClockState, NewEntry, WorkEntry};
use crate::utils::time::truncate_to_seconds;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockOutcome {
    ClockedIn(WorkEntry),
    ClockedOut(WorkEntry),
}

impl ClockOutcome {
    pub fn entry(&self) -> &WorkEntry {
        match self {
            ClockOutcome::ClockedIn(e) | ClockOutcome::ClockedOut(e) => e,
        }
    }
}

pub struct ClockLogic;

impl ClockLogic {
    /// Toggle the employee's clock at `now`.
    ///
    /// The state is derived from a fresh listing, never from a cached value,
    /// and the session is re-fetched once the mutation is stored.
    pub fn perform<R>(
        repo: &mut R,
        session: &mut Session,
        now: NaiveDateTime,
    ) -> AppResult<ClockOutcome>
    where
        R: WorkEntryRepository + ?Sized,
    {
        session.refresh(&*repo)?;
        let at = truncate_to_seconds(now.time());

        let outcome = match session.clock_state() {
            ClockState::ClockIn => {
                // the last entry is closed, but an older one may still be open
                if let Some(open) = session.open_entry() {
                    return Err(AppError::Validation(format!(
                        "Entry #{} from {} is still open; delete it before clocking in again.",
                        open.id,
                        open.date_str()
                    )));
                }

                let new = NewEntry::punch(&session.employee().id, now.date(), at);
                ClockOutcome::ClockedIn(repo.create_entry(&new)?)
            }
            ClockState::ClockOut => {
                let last_id = session
                    .entries()
                    .last()
                    .map(|e| e.id)
                    .ok_or_else(|| AppError::Validation("No open entry to close.".into()))?;

                ClockOutcome::ClockedOut(repo.close_open_entry(last_id, at)?)
            }
        };

        session.refresh(&*repo)?;
        Ok(outcome)
    }
}
