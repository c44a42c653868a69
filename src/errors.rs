//! Unified application error type.
//! All modules (auth, store, sync, export, cli) return AppError to keep the
//! error handling consistent across the core/shell boundary.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Authentication / authorization
    // ---------------------------
    #[error("Invalid username or password")]
    AuthFailure,

    #[error("Not authorized: {0}")]
    Denied(String),

    // ---------------------------
    // Store
    // ---------------------------
    #[error("Store error: {0}")]
    Storage(String),

    #[error("No project at row index {0}")]
    InvalidRow(usize),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    // ---------------------------
    // Remote sync
    // ---------------------------
    #[error("Remote sync error: {0}")]
    Sync(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
