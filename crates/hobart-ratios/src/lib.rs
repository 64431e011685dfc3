#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod columns;
pub mod correlation;
pub mod efficiency;
pub mod engine;
pub mod error;
pub mod leverage;
pub mod profitability;
pub mod registry;
pub mod traits;

pub use correlation::{CorrelationMatrix, DEFAULT_CORRELATION_COLUMNS, correlation_matrix};
pub use engine::{RatioEngine, RatioRun, check_schema, compute_ratio};
pub use error::{RatioError, Result};
pub use registry::{
    RatioInfo, all_ratios, available_ratios, get_ratio_info, ratio_by_name, ratios_by_category,
};
pub use traits::{Ratio, RatioCategory, RatioUnit};
