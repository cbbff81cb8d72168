use crate::config::Config;
use crate::core::report::{PageSpec, ReportRenderer};
use crate::core::session::Session;
use crate::db::SqliteRepository;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, resolve_output};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::report_export::{export_pdf, export_txt};
use crate::ui::messages::warning;
use crate::utils::range::DateRange;
use std::path::PathBuf;

/// What to export and where.
#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    pub format: ExportFormat,
    pub file: &'a str,
    pub range: Option<DateRange>,
    /// Employee whose entries are exported; ignored with `all`.
    pub employee: Option<&'a str>,
    /// Every employee's entries (flat formats only).
    pub all: bool,
    pub force: bool,
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Run an export. Returns the written path, or `None` when the selection
    /// was empty and nothing was written.
    pub fn export(
        repo: &SqliteRepository,
        req: &ExportRequest<'_>,
        cfg: &Config,
    ) -> AppResult<Option<PathBuf>> {
        if req.all && !req.format.is_flat() {
            return Err(AppError::Validation(format!(
                "--all is only available for csv and json exports, not {}.",
                req.format.as_str()
            )));
        }

        let path = resolve_output(req.file)?;

        if req.all {
            let rows: Vec<EntryExport> = repo
                .list_all_entries()?
                .iter()
                .filter(|(e, _)| in_range(req.range.as_ref(), e.date))
                .map(|(e, name)| EntryExport::from_entry(e, name.as_deref()))
                .collect();
            return Self::write_flat(req.format, &rows, path, req.force);
        }

        let employee_id = req.employee.ok_or_else(|| {
            AppError::Validation("No employee selected for export.".into())
        })?;
        let session = Session::open(repo, employee_id)?;

        if req.format.is_flat() {
            let name = session.employee().name.as_deref();
            let rows: Vec<EntryExport> = session
                .entries()
                .iter()
                .filter(|e| in_range(req.range.as_ref(), e.date))
                .map(|e| EntryExport::from_entry(e, name))
                .collect();
            return Self::write_flat(req.format, &rows, path, req.force);
        }

        let report = session.report_in(req.range.as_ref());
        if report.is_empty() {
            warning("No entries found for the selected range.");
            return Ok(None);
        }

        let lines = ReportRenderer::render(&report, &session.employee().label());
        ensure_writable(&path, req.force)?;

        match req.format {
            ExportFormat::Txt => export_txt(&lines, &path)?,
            _ => {
                let spec = PageSpec::default().with_line_height(cfg.pdf_line_height);
                export_pdf(&lines, &path, spec, cfg.pdf_font_size)?
            }
        }

        Ok(Some(path))
    }

    fn write_flat(
        format: ExportFormat,
        rows: &[EntryExport],
        path: PathBuf,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        if rows.is_empty() {
            warning("No entries found for the selected range.");
            return Ok(None);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Json => export_json(rows, &path)?,
            _ => export_csv(rows, &path)?,
        }

        Ok(Some(path))
    }
}

fn in_range(range: Option<&DateRange>, d: chrono::NaiveDate) -> bool {
    range.is_none_or(|r| r.contains(d))
}
