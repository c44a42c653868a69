use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::project::{records_to_table, ProjectRecord, COLUMNS};
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Render the records as a titled, paginated PDF table. Zero records render
/// a "No data." notice page instead of an empty table.
pub(crate) fn export_pdf(records: &[ProjectRecord], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let bytes = render_pdf(records, title);
    std::fs::write(path, bytes)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}

pub(crate) fn render_pdf(records: &[ProjectRecord], title: &str) -> Vec<u8> {
    let mut pdf = PdfManager::new();

    if records.is_empty() {
        pdf.write_notice(title, "No data.");
    } else {
        let rows = records_to_table(records);
        pdf.write_table(title, &COLUMNS, &rows);
    }

    pdf.finish()
}
