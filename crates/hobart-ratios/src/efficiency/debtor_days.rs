//! Debtor Days
//!
//! Average number of days customers take to pay, from year-end receivables and
//! annual sales.

use crate::columns::{DEBTORS, SALES};
use crate::traits::{Ratio, RatioCategory, RatioUnit};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Configuration for the Debtor Days ratio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtorDaysConfig {
    /// Days in the fiscal year used to derive daily sales (default: 365)
    pub days_in_year: f64,
}

impl Default for DebtorDaysConfig {
    fn default() -> Self {
        Self {
            days_in_year: 365.0,
        }
    }
}

/// Debtors / (Sales / days_in_year)
#[derive(Debug, Clone, Default)]
pub struct DebtorDays {
    config: DebtorDaysConfig,
}

impl DebtorDays {
    /// Create with a custom configuration.
    pub const fn with_config(config: DebtorDaysConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub const fn config(&self) -> &DebtorDaysConfig {
        &self.config
    }
}

impl Ratio for DebtorDays {
    fn name(&self) -> &'static str {
        "debtor_days"
    }

    fn label(&self) -> &'static str {
        "Debtor Days"
    }

    fn description(&self) -> &'static str {
        "Receivables expressed in days of sales"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Efficiency
    }

    fn unit(&self) -> RatioUnit {
        RatioUnit::Days
    }

    fn required_columns(&self) -> &[&'static str] {
        &[DEBTORS, SALES]
    }

    fn expression(&self) -> Expr {
        col(DEBTORS) / (col(SALES) / lit(self.config.days_in_year))
    }
}
