mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
pub mod pdf;
mod report_export;

pub use logic::{ExportLogic, ExportRequest};
pub use model::EntryExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion notice for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Txt,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Txt => "txt",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Flat one-row-per-entry formats; the others export the week report.
    pub fn is_flat(&self) -> bool {
        matches!(self, ExportFormat::Csv | ExportFormat::Json)
    }
}
