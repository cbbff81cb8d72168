use std::fmt;

/// The next action available to an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    ClockIn,
    ClockOut,
}

impl ClockState {
    pub fn label(&self) -> &'static str {
        match self {
            ClockState::ClockIn => "Clock In",
            ClockState::ClockOut => "Clock Out",
        }
    }
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
