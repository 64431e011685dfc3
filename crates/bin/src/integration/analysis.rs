//! Analysis pipeline for the CLI.
//!
//! Loads whichever statements were given, applies the requested ratios one at
//! a time (a failing ratio is logged and skipped, the rest still run) and
//! renders or exports the results.

use clap::ValueEnum;
use hobart_data::{CombinedTable, DataError, TableLoader, TableMerger};
use hobart_output::{
    Chart, ChartRenderer, ExportFormat, Exporter, MarkdownChartRenderer, OutputError,
    TextChartRenderer,
};
use hobart_ratios::{Ratio, RatioEngine, RatioError, RatioRun, all_ratios, ratio_by_name};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Error type for analysis pipeline operations.
#[derive(Debug, thiserror::Error)]
pub(crate) enum AnalysisError {
    /// Statement loading or merging failed.
    #[error("{0}")]
    Data(#[from] DataError),
    /// Ratio lookup or computation failed.
    #[error("{0}")]
    Ratio(#[from] RatioError),
    /// Rendering or export failed.
    #[error("{0}")]
    Output(#[from] OutputError),
    /// Writing an output file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Neither statement path was given.
    #[error("No statement given, pass --balance-sheet and/or --profit-loss")]
    NoStatements,
}

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Terminal bar chart
    Text,
    /// Markdown table
    Markdown,
    /// Wide CSV
    Csv,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    pub(crate) const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Statement export locations.
#[derive(Debug, Clone, Default)]
pub(crate) struct StatementPaths {
    pub(crate) balance_sheet: Option<PathBuf>,
    pub(crate) profit_loss: Option<PathBuf>,
}

/// Load the given statements into one combined table.
///
/// With both statements they are merged on fiscal year; with one, it is used
/// on its own.
pub(crate) fn load_combined(paths: &StatementPaths) -> Result<CombinedTable, AnalysisError> {
    let balance_sheet = paths
        .balance_sheet
        .as_ref()
        .map(|p| TableLoader::balance_sheet().load_path(p))
        .transpose()?;
    let profit_loss = paths
        .profit_loss
        .as_ref()
        .map(|p| TableLoader::profit_and_loss().load_path(p))
        .transpose()?;

    let combined = match (balance_sheet, profit_loss) {
        (Some(bs), Some(pl)) => TableMerger::new().merge(&bs, &pl)?,
        (Some(statement), None) | (None, Some(statement)) => CombinedTable::from(statement),
        (None, None) => return Err(AnalysisError::NoStatements),
    };

    info!(
        years = combined.height(),
        columns = combined.column_names().len(),
        "Prepared combined table"
    );
    Ok(combined)
}

/// Resolve ratio names; no names selects every ratio.
pub(crate) fn select_ratios(names: &[String]) -> Result<Vec<Box<dyn Ratio>>, AnalysisError> {
    if names.is_empty() {
        return Ok(all_ratios());
    }
    names
        .iter()
        .map(|name| ratio_by_name(name).map_err(AnalysisError::from))
        .collect()
}

/// Apply each ratio in turn, logging and skipping the ones that fail.
pub(crate) fn compute_ratios(table: &mut CombinedTable, ratios: Vec<Box<dyn Ratio>>) -> RatioRun {
    let run = ratios.into_iter().collect::<RatioEngine>().run(table);
    for (name, e) in &run.failed {
        error!(ratio = *name, error = %e, "Skipping ratio");
    }
    run
}

/// Render a chart in the requested format.
pub(crate) fn render_chart(chart: &Chart, format: OutputFormat) -> Result<String, AnalysisError> {
    let content = match format {
        OutputFormat::Text => TextChartRenderer::default().render(chart),
        OutputFormat::Markdown => MarkdownChartRenderer::default().render(chart),
        OutputFormat::Csv => chart.export_to_string(ExportFormat::Csv)?,
        OutputFormat::Json => chart.export_to_string(ExportFormat::PrettyJson)?,
    };
    Ok(content)
}

/// Print `content`, or write it to `<dir>/<name>.<ext>` when a directory is given.
pub(crate) fn emit(
    name: &str,
    content: &str,
    format: OutputFormat,
    output_dir: Option<&Path>,
) -> Result<(), AnalysisError> {
    match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let path = dir.join(format!("{name}.{}", format.extension()));
            fs::write(&path, content)?;
            info!(path = %path.display(), "Wrote output");
        }
        None => println!("{content}"),
    }
    Ok(())
}
