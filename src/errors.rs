//! Unified application error type.
//! Import, transform, filter, config and export code all return AppError
//! so that `main` can report every failure the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / input
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    // ---------------------------
    // Row parsing (abort the whole transform)
    // ---------------------------
    #[error("Line {line}: invalid timestamp in column '{column}': '{value}'")]
    InvalidTimestamp {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("Line {line}: invalid duration in column 'Dauer': '{value}'")]
    InvalidDuration { line: usize, value: String },

    #[error("Line {line}: invalid percentage: '{value}'")]
    InvalidPercentage { line: usize, value: String },

    // ---------------------------
    // Filter arguments
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// True for errors raised while reading rows; these mean no output at all.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidTimestamp { .. }
                | AppError::InvalidDuration { .. }
                | AppError::InvalidPercentage { .. }
        )
    }
}
