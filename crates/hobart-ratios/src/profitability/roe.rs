//! Return on Equity (ROE)
//!
//! Net profit generated per unit of shareholders' equity.

use crate::columns::{EQUITY_SHARE_CAPITAL, NET_PROFIT, RESERVES};
use crate::traits::{Ratio, RatioCategory, RatioUnit};
use polars::prelude::*;

/// Net profit / (Equity Share Capital + Reserves)
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnOnEquity;

impl Ratio for ReturnOnEquity {
    fn name(&self) -> &'static str {
        "return_on_equity"
    }

    fn label(&self) -> &'static str {
        "Return On Equity"
    }

    fn description(&self) -> &'static str {
        "Net profit relative to shareholders' equity"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Profitability
    }

    fn unit(&self) -> RatioUnit {
        RatioUnit::Multiple
    }

    fn required_columns(&self) -> &[&'static str] {
        &[NET_PROFIT, EQUITY_SHARE_CAPITAL, RESERVES]
    }

    fn expression(&self) -> Expr {
        col(NET_PROFIT) / (col(EQUITY_SHARE_CAPITAL) + col(RESERVES))
    }
}
