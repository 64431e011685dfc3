//! Debt-to-Equity Ratio
//!
//! Total borrowings relative to shareholders' funds (equity share capital plus
//! reserves). Higher values indicate heavier reliance on debt financing.

use crate::columns::{BORROWINGS, EQUITY_SHARE_CAPITAL, RESERVES};
use crate::traits::{Ratio, RatioCategory, RatioUnit};
use polars::prelude::*;

/// Borrowings / (Equity Share Capital + Reserves)
#[derive(Debug, Clone, Copy, Default)]
pub struct DebtToEquity;

impl Ratio for DebtToEquity {
    fn name(&self) -> &'static str {
        "debt_to_equity_ratio"
    }

    fn label(&self) -> &'static str {
        "Debt To Equity Ratio"
    }

    fn description(&self) -> &'static str {
        "Borrowings relative to shareholders' equity"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Leverage
    }

    fn unit(&self) -> RatioUnit {
        RatioUnit::Multiple
    }

    fn required_columns(&self) -> &[&'static str] {
        &[BORROWINGS, EQUITY_SHARE_CAPITAL, RESERVES]
    }

    fn expression(&self) -> Expr {
        col(BORROWINGS) / (col(EQUITY_SHARE_CAPITAL) + col(RESERVES))
    }
}
