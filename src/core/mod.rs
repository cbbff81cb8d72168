pub mod clock;
pub mod editor;
pub mod log;
pub mod report;
pub mod resolver;
pub mod session;
pub mod weeks;

pub use clock::{ClockLogic, ClockOutcome};
pub use editor::EntryEditor;
pub use report::{Page, PageSpec, PlacedLine, ReportLine, ReportRenderer};
pub use resolver::ClockStateResolver;
pub use session::Session;
pub use weeks::{Report, WeekAggregator, WeekBucket};
