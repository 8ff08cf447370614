use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MarkbookError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to parse marksheet: {0}")]
    ParseError(String),

    #[error("{max_marks} max mark value(s) supplied for {sheets} marksheet(s)")]
    MaxMarksMismatch { sheets: usize, max_marks: usize },

    #[error("max mark for '{sheet}' must be positive, got {value}")]
    InvalidMaxMark { sheet: String, value: Decimal },

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
