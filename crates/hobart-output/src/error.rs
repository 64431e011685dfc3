//! Error types for rendering and export.

use hobart_data::DataError;
use thiserror::Error;

/// Errors that can occur while building, rendering or exporting charts.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Table access error.
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non UTF-8 output from the CSV writer.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
