//! Error types for the bidsheet library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bidsheet operations.
#[derive(Debug, Error)]
pub enum BidsheetError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The extraction service broke its output contract: the response
    /// was not a sequence of item records. Rejects the whole document.
    #[error("extraction contract violation: {0}")]
    Contract(String),

    /// Transport or API failure while calling the extraction service.
    #[error("extraction request failed: {0}")]
    Api(String),

    /// Acceptance threshold outside 0-100, rejected at configuration
    /// time.
    #[error("invalid threshold {0}: must be in 0-100")]
    InvalidThreshold(u8),

    /// Invalid sheet layout configuration.
    #[error("invalid sheet layout: {0}")]
    Layout(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the CSV writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error from the XLSX writer.
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Error saving or loading a comparison report.
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// Result type alias for bidsheet operations.
pub type Result<T> = std::result::Result<T, BidsheetError>;
