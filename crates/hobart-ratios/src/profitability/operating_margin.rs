//! Operating Profit Margin

use crate::columns::{OPERATING_PROFIT, SALES};
use crate::traits::{Ratio, RatioCategory, RatioUnit};
use polars::prelude::*;

/// (Operating Profit / Sales) * 100
#[derive(Debug, Clone, Copy, Default)]
pub struct OperatingProfitMargin;

impl Ratio for OperatingProfitMargin {
    fn name(&self) -> &'static str {
        "operating_profit_margin"
    }

    fn label(&self) -> &'static str {
        "Operating Profit Margin"
    }

    fn description(&self) -> &'static str {
        "Operating profit as a percentage of sales"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Profitability
    }

    fn unit(&self) -> RatioUnit {
        RatioUnit::Percent
    }

    fn required_columns(&self) -> &[&'static str] {
        &[OPERATING_PROFIT, SALES]
    }

    fn expression(&self) -> Expr {
        (col(OPERATING_PROFIT) / col(SALES)) * lit(100.0)
    }
}
