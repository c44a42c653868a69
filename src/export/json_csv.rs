use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::project::{ProjectRecord, COLUMNS};
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Pretty-printed JSON with the fixed column names as keys.
pub(crate) fn export_json(records: &[ProjectRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV with the fixed column names as the header row.
pub(crate) fn export_csv(records: &[ProjectRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    // Header goes out explicitly so an empty view still yields a valid
    // header-only file.
    wtr.write_record(COLUMNS)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;

    for record in records {
        wtr.serialize(record)
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    notify_export_success("CSV", path);
    Ok(())
}
