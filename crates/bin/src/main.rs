//! Hobart CLI binary.
//!
//! Loads provider statement exports, computes financial ratios and renders
//! them as terminal charts, Markdown, CSV or JSON.

mod integration;

use clap::{Parser, Subcommand};
use hobart::{Chart, ChartStyle};
use hobart_output::{ExportFormat, Exporter, correlation_to_ascii, correlation_to_markdown};
use hobart_ratios::{DEFAULT_CORRELATION_COLUMNS, available_ratios, correlation_matrix};
use integration::analysis::{
    OutputFormat, StatementPaths, compute_ratios, emit, load_combined, render_chart, select_ratios,
};
use std::path::PathBuf;
use std::process;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const METRICS_TITLE: &str = "Profit Vs Sales Vs EPS";
const DEFAULT_METRIC_COLUMNS: [&str; 3] = ["Sales", "Operating Profit", "EPS"];

#[derive(Parser)]
#[command(name = "hobart")]
#[command(about = "Hobart: financial ratio analysis of statement exports", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute ratios and chart them
    Ratios {
        /// Balance sheet export (CSV)
        #[arg(long)]
        balance_sheet: Option<PathBuf>,

        /// Profit & loss export (CSV)
        #[arg(long)]
        profit_loss: Option<PathBuf>,

        /// Company name shown in chart titles
        #[arg(long)]
        company: Option<String>,

        /// Ratio to compute (repeatable, default all)
        #[arg(long = "ratio")]
        ratios: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write one file per chart into this directory
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Chart raw profit & loss metrics together
    Metrics {
        /// Profit & loss export (CSV)
        #[arg(long)]
        profit_loss: PathBuf,

        /// Metric to plot (repeatable)
        #[arg(long = "column")]
        columns: Vec<String>,

        /// Company name shown in the chart title
        #[arg(long)]
        company: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Correlation matrix of profit & loss metrics
    Correlation {
        /// Profit & loss export (CSV)
        #[arg(long)]
        profit_loss: PathBuf,

        /// Metric to correlate (repeatable)
        #[arg(long = "column")]
        columns: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List available ratios
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,hobart=info,hobart_data=info,hobart_ratios=info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn style(company: Option<String>) -> ChartStyle {
    company.map(ChartStyle::for_company).unwrap_or_default()
}

fn column_refs<'a>(columns: &'a [String], default: &[&'a str]) -> Vec<&'a str> {
    if columns.is_empty() {
        default.to_vec()
    } else {
        columns.iter().map(String::as_str).collect()
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ratios {
            balance_sheet,
            profit_loss,
            company,
            ratios,
            format,
            output,
        } => {
            let mut table = load_combined(&StatementPaths {
                balance_sheet,
                profit_loss,
            })?;
            if table.is_empty() {
                warn!("Statements share no fiscal year, charts will be empty");
            }

            let selected = select_ratios(&ratios)?;
            let run = compute_ratios(&mut table, selected);
            let style = style(company);

            for ratio in &run.applied {
                let chart = Chart::for_ratio(&table, ratio.as_ref(), &style)?;
                let content = render_chart(&chart, format)?;
                emit(ratio.name(), &content, format, output.as_deref())?;
            }

            info!(
                applied = run.applied.len(),
                failed = run.failed.len(),
                "Ratio run finished"
            );
            if !run.is_success() {
                let names: Vec<_> = run.failed.iter().map(|(name, _)| *name).collect();
                return Err(format!("{} ratio(s) failed: {}", names.len(), names.join(", ")).into());
            }
        }

        Commands::Metrics {
            profit_loss,
            columns,
            company,
            format,
        } => {
            let table = load_combined(&StatementPaths {
                balance_sheet: None,
                profit_loss: Some(profit_loss),
            })?;
            let columns = column_refs(&columns, &DEFAULT_METRIC_COLUMNS);
            let chart = Chart::for_columns(&table, METRICS_TITLE, &columns, &style(company))?;
            println!("{}", render_chart(&chart, format)?);
        }

        Commands::Correlation {
            profit_loss,
            columns,
            format,
        } => {
            let table = load_combined(&StatementPaths {
                balance_sheet: None,
                profit_loss: Some(profit_loss),
            })?;
            let columns = column_refs(&columns, &DEFAULT_CORRELATION_COLUMNS);
            let matrix = correlation_matrix(&table, &columns)?;

            let title = "Correlation Matrix";
            let content = match format {
                OutputFormat::Text => correlation_to_ascii(&matrix, title),
                OutputFormat::Markdown => correlation_to_markdown(&matrix, title),
                OutputFormat::Csv => matrix.export_to_string(ExportFormat::Csv)?,
                OutputFormat::Json => matrix.export_to_string(ExportFormat::PrettyJson)?,
            };
            println!("{content}");
        }

        Commands::List { json } => {
            let ratios = available_ratios();
            if json {
                println!("{}", serde_json::to_string_pretty(&ratios)?);
            } else {
                println!("{:<28} {:<14} {:<9} Columns", "Name", "Category", "Unit");
                println!("{}", "-".repeat(80));
                for info in &ratios {
                    println!(
                        "{:<28} {:<14} {:<9} {}",
                        info.name,
                        info.category.to_string(),
                        format!("{:?}", info.unit),
                        info.required_columns.join(", ")
                    );
                }
            }
        }
    }

    Ok(())
}
