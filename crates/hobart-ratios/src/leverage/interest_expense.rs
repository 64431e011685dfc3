//! Interest Expense Ratio
//!
//! Interest as a percentage of operating profit.

use crate::columns::{INTEREST, OPERATING_PROFIT};
use crate::traits::{Ratio, RatioCategory, RatioUnit};
use polars::prelude::*;

/// (Interest / Operating Profit) * 100
#[derive(Debug, Clone, Copy, Default)]
pub struct InterestExpense;

impl Ratio for InterestExpense {
    fn name(&self) -> &'static str {
        "interest_expense"
    }

    fn label(&self) -> &'static str {
        "Interest Expense As Percent Of Operating Profit"
    }

    fn description(&self) -> &'static str {
        "Share of operating profit consumed by interest"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Leverage
    }

    fn unit(&self) -> RatioUnit {
        RatioUnit::Percent
    }

    fn required_columns(&self) -> &[&'static str] {
        &[INTEREST, OPERATING_PROFIT]
    }

    fn expression(&self) -> Expr {
        (col(INTEREST) / col(OPERATING_PROFIT)) * lit(100.0)
    }
}
