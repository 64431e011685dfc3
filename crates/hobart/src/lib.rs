#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export main types from sub-crates
pub use hobart_data as data;
pub use hobart_output as output;
pub use hobart_ratios as ratios;

pub use hobart_data::{CombinedTable, LoaderConfig, StatementTable, TableLoader, TableMerger};
pub use hobart_output::{Chart, ChartRenderer, ChartStyle};
pub use hobart_ratios::{Ratio, RatioEngine, RatioRun};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[rstest]
    #[case("debt_to_equity_ratio")]
    #[case("interest_expense")]
    fn test_reexports_resolve_ratios(#[case] name: &str) {
        assert!(ratios::get_ratio_info(name).is_some());
    }
}
