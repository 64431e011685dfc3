#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod chart;
pub mod correlation;
pub mod error;
pub mod export;

pub use chart::{
    Chart, ChartPoint, ChartRenderer, ChartSeries, ChartStyle, MarkdownChartRenderer,
    TextChartRenderer, default_color, format_value,
};
pub use correlation::{correlation_to_ascii, correlation_to_markdown};
pub use error::OutputError;
pub use export::{ExportFormat, Exporter};
