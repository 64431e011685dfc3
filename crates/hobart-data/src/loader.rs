//! Provider export loading.
//!
//! A provider export is a wide CSV: the first column holds metric names and
//! every other column one fiscal year, labelled `YY-MM`. Cells are formatted
//! strings such as `1,234.50` or `12.5%`. [`TableLoader`] transposes the export
//! so that each fiscal year becomes a row and each metric a column, parsing
//! every cell into an `f64`.

use crate::error::{DataError, Result};
use crate::fiscal_year::FiscalYearIndexer;
use crate::table::{DATE_COLUMN, StatementTable};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Profit-and-loss metrics reported as percentages.
pub const PROFIT_LOSS_PERCENT_COLUMNS: [&str; 3] = ["Price Dividend", "Dividend Payout", "OPM"];

/// Configuration for a statement flavor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Metrics whose cells are percentages (stored divided by 100)
    pub percent_columns: Vec<String>,
    /// Thousands separator stripped from plain cells (default: `,`)
    pub thousands_separator: char,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::balance_sheet()
    }
}

impl LoaderConfig {
    /// Balance-sheet flavor: every metric is a plain magnitude.
    pub const fn balance_sheet() -> Self {
        Self {
            percent_columns: Vec::new(),
            thousands_separator: ',',
        }
    }

    /// Profit-and-loss flavor: dividend and margin metrics are percentages.
    pub fn profit_and_loss() -> Self {
        Self {
            percent_columns: PROFIT_LOSS_PERCENT_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            thousands_separator: ',',
        }
    }

    /// Mark an additional metric as percent-denominated.
    pub fn with_percent_column(mut self, column: impl Into<String>) -> Self {
        self.percent_columns.push(column.into());
        self
    }

    /// Whether a metric is percent-denominated.
    pub fn is_percent(&self, metric: &str) -> bool {
        self.percent_columns.iter().any(|c| c == metric)
    }
}

/// Loads provider exports into [`StatementTable`]s.
#[derive(Debug, Clone, Default)]
pub struct TableLoader {
    config: LoaderConfig,
    indexer: FiscalYearIndexer,
}

impl TableLoader {
    /// Create a loader for the given flavor.
    pub const fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            indexer: FiscalYearIndexer::new(),
        }
    }

    /// Loader for balance-sheet exports.
    pub const fn balance_sheet() -> Self {
        Self::new(LoaderConfig::balance_sheet())
    }

    /// Loader for profit-and-loss exports.
    pub fn profit_and_loss() -> Self {
        Self::new(LoaderConfig::profit_and_loss())
    }

    /// Loader configuration.
    pub const fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load an export from a file.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<StatementTable> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Opening statement export");
        let file = File::open(path)?;
        self.load_reader(file)
    }

    /// Load an export from any reader.
    ///
    /// # Errors
    ///
    /// Fails on the first cell, label or row that cannot be normalized; no
    /// partial table is returned.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<StatementTable> {
        let mut csv = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut records = csv.records();
        let header = match records.next() {
            Some(record) => record?,
            None => return Err(DataError::EmptyExport),
        };

        let labels: Vec<String> = header.iter().skip(1).map(str::to_string).collect();
        if labels.is_empty() {
            return Err(DataError::EmptyExport);
        }
        let dates = self.index_labels(&labels)?;

        let mut seen: HashSet<String> = HashSet::from([DATE_COLUMN.to_string()]);
        let mut metrics: Vec<(String, Vec<f64>)> = Vec::new();

        for (offset, record) in records.enumerate() {
            let record = record?;
            let line = record
                .position()
                .map_or(offset + 2, |p| p.line() as usize);
            if is_blank(&record) {
                debug!(line, "Skipping blank row");
                continue;
            }

            let metric = record.get(0).unwrap_or_default().to_string();
            if metric.is_empty() {
                return Err(DataError::MissingMetricName { row: line });
            }
            if record.len() != header.len() {
                return Err(DataError::RaggedRow {
                    metric,
                    expected: header.len(),
                    found: record.len(),
                });
            }
            if !seen.insert(metric.clone()) {
                return Err(DataError::DuplicateMetric(metric));
            }

            let percent = self.config.is_percent(&metric);
            let values = record
                .iter()
                .skip(1)
                .zip(&labels)
                .map(|(cell, year)| {
                    let parsed = if percent {
                        parse_percent(cell)
                    } else {
                        parse_magnitude(cell, self.config.thousands_separator)
                    };
                    parsed.ok_or_else(|| DataError::Parse {
                        metric: metric.clone(),
                        year: year.clone(),
                        value: cell.to_string(),
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            metrics.push((metric, values));
        }

        info!(
            years = dates.len(),
            metrics = metrics.len(),
            "Loaded statement export"
        );
        StatementTable::from_columns(dates, metrics)
    }

    fn index_labels(&self, labels: &[String]) -> Result<Vec<chrono::NaiveDate>> {
        let dates = self.indexer.index_all(labels)?;
        let mut seen = HashSet::with_capacity(dates.len());
        for (label, date) in labels.iter().zip(&dates) {
            if !seen.insert(*date) {
                return Err(DataError::DuplicateFiscalYear {
                    label: label.clone(),
                    date: *date,
                });
            }
        }
        Ok(dates)
    }
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

/// Parse a plain magnitude such as `1,234.50`.
///
/// Returns `None` for empty, non-numeric or non-finite cells.
pub fn parse_magnitude(cell: &str, thousands_separator: char) -> Option<f64> {
    let cleaned: String = cell
        .trim()
        .chars()
        .filter(|c| *c != thousands_separator)
        .collect();
    parse_finite(&cleaned)
}

/// Parse a percentage such as `12.5%` into a fraction (`0.125`).
///
/// The `%` sign is optional. Returns `None` for empty, non-numeric or
/// non-finite cells.
pub fn parse_percent(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    let number = cell.strip_suffix('%').unwrap_or(cell).trim_end();
    parse_finite(number).map(|v| v / 100.0)
}

fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
