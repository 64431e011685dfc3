//! Net Profit Margin

use crate::columns::{NET_PROFIT, SALES};
use crate::traits::{Ratio, RatioCategory, RatioUnit};
use polars::prelude::*;

/// (Net profit / Sales) * 100
#[derive(Debug, Clone, Copy, Default)]
pub struct NetProfitMargin;

impl Ratio for NetProfitMargin {
    fn name(&self) -> &'static str {
        "net_profit_margin"
    }

    fn label(&self) -> &'static str {
        "Net Profit Margin"
    }

    fn description(&self) -> &'static str {
        "Net profit as a percentage of sales"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Profitability
    }

    fn unit(&self) -> RatioUnit {
        RatioUnit::Percent
    }

    fn required_columns(&self) -> &[&'static str] {
        &[NET_PROFIT, SALES]
    }

    fn expression(&self) -> Expr {
        (col(NET_PROFIT) / col(SALES)) * lit(100.0)
    }
}
