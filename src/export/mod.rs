mod fs_utils;
mod ics;
mod json_csv;
pub mod logic;
mod pdf;
mod pdf_export;
mod xlsx;

pub use ics::{ics_for_record, ics_for_records};
pub use logic::ExportLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Completion message shared by every encoder.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Pdf,
    Ics,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Ics => "ics",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
