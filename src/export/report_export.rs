use crate::core::report::{PageSpec, ReportRenderer};
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Write rendered report lines as plain text, one per line.
pub(crate) fn export_txt(lines: &[String], path: &Path) -> AppResult<()> {
    info(format!("Exporting to text: {}", path.display()));

    let mut body = lines.join("\n");
    body.push('\n');
    fs::write(path, body)?;

    notify_export_success("Text", path);
    Ok(())
}

/// Lay the lines out on pages and write them as a PDF.
pub(crate) fn export_pdf(
    lines: &[String],
    path: &Path,
    spec: PageSpec,
    font_size: f32,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let pages = ReportRenderer::layout(lines, &spec);

    let mut pdf = PdfManager::new(spec, font_size);
    pdf.write_pages(&pages);
    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
