//! Error types for statement loading and normalization.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading, indexing or merging statement tables.
#[derive(Debug, Error)]
pub enum DataError {
    /// A cell could not be converted to the expected numeric form
    #[error("Cannot parse {value:?} as a number for metric {metric:?} in year {year:?}")]
    Parse {
        /// Metric (row) name of the offending cell
        metric: String,
        /// Fiscal-year label (column header) of the offending cell
        year: String,
        /// Raw cell contents
        value: String,
    },

    /// A fiscal-year label does not match the `YY-MM` pattern
    #[error("Invalid fiscal-year label {label:?}: {reason}")]
    Format {
        /// The label as found in the export header
        label: String,
        /// Why the label was rejected
        reason: String,
    },

    /// The export has no header row or no fiscal-year columns
    #[error("Export contains no fiscal-year columns")]
    EmptyExport,

    /// A data row has a different number of cells than the header
    #[error("Row for metric {metric:?} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Metric name of the row
        metric: String,
        /// Cell count of the header row
        expected: usize,
        /// Cell count of this row
        found: usize,
    },

    /// A data row carries values but no metric name
    #[error("Row on line {row} has values but no metric name")]
    MissingMetricName {
        /// One-based line number of the row in the export
        row: usize,
    },

    /// The same metric name appears more than once
    #[error("Duplicate metric: {0}")]
    DuplicateMetric(String),

    /// Two year labels resolve to the same fiscal year
    #[error("Fiscal-year label {label:?} duplicates fiscal year {date}")]
    DuplicateFiscalYear {
        /// The second label resolving to the date
        label: String,
        /// The shared fiscal-year date
        date: chrono::NaiveDate,
    },

    /// A requested column is not present in the table
    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// CSV decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
