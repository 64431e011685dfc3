//! The [`Ratio`] trait implemented by every derived ratio.

use polars::prelude::Expr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ratio families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioCategory {
    /// Capital structure and debt burden (debt-to-equity, interest expense)
    Leverage,
    /// Returns and margins (ROE, ROCE, operating and net margin)
    Profitability,
    /// Working-capital use (debtor days, inventory turnover)
    Efficiency,
}

impl fmt::Display for RatioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Leverage => "Leverage",
            Self::Profitability => "Profitability",
            Self::Efficiency => "Efficiency",
        };
        f.write_str(name)
    }
}

/// Unit of a computed ratio value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioUnit {
    /// Plain quotient, e.g. 0.67
    Multiple,
    /// Already multiplied by 100, e.g. 12.5 for 12.5%
    Percent,
    /// Number of days
    Days,
}

impl RatioUnit {
    /// Suffix used when displaying a value.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Multiple => "x",
            Self::Percent => "%",
            Self::Days => " days",
        }
    }
}

/// A row-wise ratio over columns of a combined statement table.
///
/// Implementations are pure: the expression reads only source metrics, never
/// another derived ratio.
pub trait Ratio: fmt::Debug {
    /// Unique name, also used as the output column name.
    fn name(&self) -> &'static str;

    /// Human-readable label for charts.
    fn label(&self) -> &'static str;

    /// One-line description of what the ratio measures.
    fn description(&self) -> &'static str;

    /// Ratio family.
    fn category(&self) -> RatioCategory;

    /// Unit of the computed values.
    fn unit(&self) -> RatioUnit;

    /// Source columns the expression reads.
    fn required_columns(&self) -> &[&'static str];

    /// Polars expression computing the ratio for every row.
    fn expression(&self) -> Expr;
}
