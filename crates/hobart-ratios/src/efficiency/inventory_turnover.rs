//! Inventory Turnover
//!
//! How many times inventory is sold through in a year. Falling turnover can
//! signal slowing demand or obsolete stock.

use crate::columns::{INVENTORY, SALES};
use crate::traits::{Ratio, RatioCategory, RatioUnit};
use polars::prelude::*;

/// Sales / Inventory
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryTurnover;

impl Ratio for InventoryTurnover {
    fn name(&self) -> &'static str {
        "inventory_turnover"
    }

    fn label(&self) -> &'static str {
        "Inventory Turnover"
    }

    fn description(&self) -> &'static str {
        "Sales relative to year-end inventory"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Efficiency
    }

    fn unit(&self) -> RatioUnit {
        RatioUnit::Multiple
    }

    fn required_columns(&self) -> &[&'static str] {
        &[SALES, INVENTORY]
    }

    fn expression(&self) -> Expr {
        col(SALES) / col(INVENTORY)
    }
}
