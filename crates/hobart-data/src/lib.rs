#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod fiscal_year;
pub mod loader;
pub mod merge;
pub mod table;

pub use error::{DataError, Result};
pub use fiscal_year::FiscalYearIndexer;
pub use loader::{LoaderConfig, TableLoader};
pub use merge::TableMerger;
pub use table::{CombinedTable, DATE_COLUMN, StatementTable};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
