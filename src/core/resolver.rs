use crate::models::{ClockState, WorkEntry};

/// Derives the next clock action from an employee's entries.
pub struct ClockStateResolver;

impl ClockStateResolver {
    /// Only the last entry in the given order is inspected. The store returns
    /// entries in creation order and that order is trusted as-is, even if a
    /// later date appears before an earlier one.
    pub fn resolve(entries: &[WorkEntry]) -> ClockState {
        match entries.last() {
            Some(last) if last.is_open() => ClockState::ClockOut,
            _ => ClockState::ClockIn,
        }
    }
}
