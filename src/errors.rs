//! Unified application error type.
//! Reader, normalizer, writer and CLI handlers all return AppError so the
//! top level can report every failure the same way. Wrapping variants only
//! name the failing stage; the wrapped error is reported through `source()`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error")]
    Io(#[from] io::Error),

    // ---------------------------
    // Spreadsheet input
    // ---------------------------
    #[error("Cannot read spreadsheet")]
    Spreadsheet(#[from] calamine::Error),

    #[error("No worksheet with data found in {0}")]
    NoWorksheet(String),

    // ---------------------------
    // CSV output
    // ---------------------------
    #[error("CSV error")]
    Csv(#[from] csv::Error),

    #[error("Conversion cancelled: {0}")]
    Cancelled(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    #[error("Invalid date/time format pattern: {0}")]
    InvalidFormat(String),
}

pub type AppResult<T> = Result<T, AppError>;
