//! Ratio Registry
//!
//! Central registry for all available ratios. Allows lookup and instantiation
//! by name, e.g. from command-line arguments.

use crate::efficiency::{DebtorDays, InventoryTurnover};
use crate::error::{RatioError, Result};
use crate::leverage::{DebtToEquity, InterestExpense};
use crate::profitability::{
    NetProfitMargin, OperatingProfitMargin, ReturnOnCapitalEmployed, ReturnOnEquity,
};
use crate::traits::{Ratio, RatioCategory, RatioUnit};
use serde::Serialize;

/// Ratio metadata
#[derive(Debug, Clone, Serialize)]
pub struct RatioInfo {
    /// Ratio name (unique identifier and output column)
    pub name: &'static str,
    /// Chart label
    pub label: &'static str,
    /// Ratio category
    pub category: RatioCategory,
    /// Unit of the computed values
    pub unit: RatioUnit,
    /// Brief description of what the ratio measures
    pub description: &'static str,
    /// Required column names in the combined table
    pub required_columns: Vec<&'static str>,
}

impl From<&dyn Ratio> for RatioInfo {
    fn from(ratio: &dyn Ratio) -> Self {
        Self {
            name: ratio.name(),
            label: ratio.label(),
            category: ratio.category(),
            unit: ratio.unit(),
            description: ratio.description(),
            required_columns: ratio.required_columns().to_vec(),
        }
    }
}

/// Instances of every registered ratio, balance-sheet ratios first.
pub fn all_ratios() -> Vec<Box<dyn Ratio>> {
    vec![
        Box::new(DebtToEquity),
        Box::new(ReturnOnEquity),
        Box::new(ReturnOnCapitalEmployed),
        Box::new(DebtorDays::default()),
        Box::new(InventoryTurnover),
        Box::new(OperatingProfitMargin),
        Box::new(NetProfitMargin),
        Box::new(InterestExpense),
    ]
}

/// Get all available ratio info
pub fn available_ratios() -> Vec<RatioInfo> {
    all_ratios()
        .iter()
        .map(|r| RatioInfo::from(r.as_ref()))
        .collect()
}

/// Get ratios by category
pub fn ratios_by_category(category: RatioCategory) -> Vec<RatioInfo> {
    available_ratios()
        .into_iter()
        .filter(|r| r.category == category)
        .collect()
}

/// Get ratio info by name
pub fn get_ratio_info(name: &str) -> Option<RatioInfo> {
    available_ratios().into_iter().find(|r| r.name == name)
}

/// Instantiate a ratio by name.
///
/// # Errors
///
/// Returns [`RatioError::UnknownRatio`] if no ratio has this name.
pub fn ratio_by_name(name: &str) -> Result<Box<dyn Ratio>> {
    all_ratios()
        .into_iter()
        .find(|r| r.name() == name)
        .ok_or_else(|| RatioError::UnknownRatio(name.to_string()))
}
