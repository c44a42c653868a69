use std::fs;
use std::path::Path;

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::ics::{ics_for_record, ics_for_records};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::export::{notify_export_success, ExportFormat};
use crate::filter::ProjectFilter;
use crate::models::project::ProjectRecord;

/// High-level export dispatch.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the already-authorized view to `file`.
    ///
    /// The filter is applied here so every format sees the same sub-sequence.
    /// Empty views still produce valid output: an xlsx with only the header
    /// row (re-loadable by the store), a PDF "No data." page, an empty
    /// VCALENDAR container, a header-only CSV or an empty JSON array.
    pub fn export(
        records: &[ProjectRecord],
        filter: &ProjectFilter,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let view = filter.apply(records);
        let title = build_pdf_title(filter);

        match format {
            ExportFormat::Xlsx => export_xlsx(&view, path)?,
            ExportFormat::Pdf => export_pdf(&view, path, &title)?,
            ExportFormat::Ics => {
                // A single-row view uses the single-event encoder; anything
                // else gets the bulk container.
                let bytes = match view.as_slice() {
                    [only] => ics_for_record(only),
                    _ => ics_for_records(&view),
                };
                fs::write(path, bytes)?;
                notify_export_success("ICS", path);
            }
            ExportFormat::Csv => export_csv(&view, path)?,
            ExportFormat::Json => export_json(&view, path)?,
        }

        Ok(())
    }
}

/// PDF title reflecting the active filter.
fn build_pdf_title(filter: &ProjectFilter) -> String {
    if filter.is_empty() {
        return "Project Report".to_string();
    }

    let mut parts = Vec::new();
    if let Some(year) = filter.year {
        parts.push(format!("year {year}"));
    }
    if let Some(location) = &filter.location {
        parts.push(location.clone());
    }
    if let Some(query) = &filter.query {
        parts.push(format!("'{query}'"));
    }
    format!("Project Report - {}", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_reflects_active_filters() {
        assert_eq!(build_pdf_title(&ProjectFilter::default()), "Project Report");
        let f = ProjectFilter::new(Some(2024), Some("NYC".into()), None);
        assert_eq!(build_pdf_title(&f), "Project Report - year 2024, NYC");
    }
}
