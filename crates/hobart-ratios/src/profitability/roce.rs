//! Return on Capital Employed (ROCE)
//!
//! Operating profit relative to the whole capital base, equity and debt alike.
//! Unlike ROE it is not flattered by leverage.

use crate::columns::{BORROWINGS, EQUITY_SHARE_CAPITAL, OPERATING_PROFIT, RESERVES};
use crate::traits::{Ratio, RatioCategory, RatioUnit};
use polars::prelude::*;

/// Operating Profit / (Equity Share Capital + Reserves + Borrowings)
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnOnCapitalEmployed;

impl Ratio for ReturnOnCapitalEmployed {
    fn name(&self) -> &'static str {
        "return_on_capital_employed"
    }

    fn label(&self) -> &'static str {
        "Return On Capital Employed"
    }

    fn description(&self) -> &'static str {
        "Operating profit relative to equity plus borrowings"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Profitability
    }

    fn unit(&self) -> RatioUnit {
        RatioUnit::Multiple
    }

    fn required_columns(&self) -> &[&'static str] {
        &[OPERATING_PROFIT, EQUITY_SHARE_CAPITAL, RESERVES, BORROWINGS]
    }

    fn expression(&self) -> Expr {
        col(OPERATING_PROFIT) / (col(EQUITY_SHARE_CAPITAL) + col(RESERVES) + col(BORROWINGS))
    }
}
