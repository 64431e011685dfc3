//! Export of chart data to CSV and JSON.
//!
//! CSV output is wide: one row per fiscal year, one column per series. JSON
//! output is the serialized [`Chart`]; non-finite values become `null` there,
//! so prefer CSV when `inf`/`NaN` rows matter.

use crate::chart::Chart;
use crate::error::OutputError;
use hobart_ratios::CorrelationMatrix;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, OutputError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), OutputError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn finish(wtr: csv::Writer<Vec<u8>>) -> Result<String, OutputError> {
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn csv_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl Exporter for Chart {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, OutputError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);

                let mut header = vec!["date".to_string()];
                header.extend(self.series.iter().map(|s| s.column.clone()));
                wtr.write_record(&header)?;

                for date in self.dates() {
                    let mut record = vec![date.to_string()];
                    for series in &self.series {
                        let value = series
                            .points
                            .iter()
                            .find(|p| p.date == date)
                            .and_then(|p| p.value);
                        record.push(csv_cell(value));
                    }
                    wtr.write_record(&record)?;
                }
                finish(wtr)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for CorrelationMatrix {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, OutputError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);

                let mut header = vec![String::new()];
                header.extend(self.columns.iter().cloned());
                wtr.write_record(&header)?;

                for (name, row) in self.columns.iter().zip(&self.values) {
                    let mut record = vec![name.clone()];
                    record.extend(row.iter().map(|v| v.to_string()));
                    wtr.write_record(&record)?;
                }
                finish(wtr)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}
