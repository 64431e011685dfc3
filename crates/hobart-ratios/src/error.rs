//! Error types for ratio computation.

use hobart_data::DataError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Result type for ratio operations.
pub type Result<T> = std::result::Result<T, RatioError>;

/// Errors that can occur while computing ratios.
#[derive(Debug, Error)]
pub enum RatioError {
    /// A ratio references a column absent from the table
    #[error("Cannot compute {ratio}: missing column {column:?}")]
    Schema {
        /// Name of the missing column
        column: String,
        /// Name of the ratio being computed
        ratio: String,
    },

    /// No ratio is registered under this name
    #[error("Unknown ratio: {0}")]
    UnknownRatio(String),

    /// Table access error
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}
