pub mod clock_state;
pub mod employee;
pub mod entry_source;
pub mod work_entry;

pub use clock_state::ClockState;
pub use employee::Employee;
pub use entry_source::EntrySource;
pub use work_entry::{NewEntry, WorkEntry};
