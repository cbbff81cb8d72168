pub mod employees;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod repository;

pub use repository::{SqliteRepository, WorkEntryRepository};
