use serde::Serialize;

/// Where a work entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    /// Recorded by a punch at the current wall-clock time.
    Clock,
    /// Entered by hand with an explicit date and times.
    Custom,
}

impl EntrySource {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntrySource::Clock => "clock",
            EntrySource::Custom => "custom",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "clock" => Some(EntrySource::Clock),
            "custom" => Some(EntrySource::Custom),
            _ => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, EntrySource::Custom)
    }
}
