//! Provider metric names read by the ratios.
//!
//! Names must match the export row labels exactly, including case.

/// Total short- and long-term debt.
pub const BORROWINGS: &str = "Borrowings";
/// Capital contributed by shareholders.
pub const EQUITY_SHARE_CAPITAL: &str = "Equity Share Capital";
/// Retained, undistributed profit.
pub const RESERVES: &str = "Reserves";
/// Trade receivables.
pub const DEBTORS: &str = "Debtors";
/// Inventory on hand at year end.
pub const INVENTORY: &str = "Inventory";
/// Revenue.
pub const SALES: &str = "Sales";
/// Earnings before interest and tax from operations.
pub const OPERATING_PROFIT: &str = "Operating Profit";
/// Profit after tax.
pub const NET_PROFIT: &str = "Net profit";
/// Interest expense.
pub const INTEREST: &str = "Interest";
/// Profit before tax.
pub const PROFIT_BEFORE_TAX: &str = "Profit before tax";
/// Earnings per share.
pub const EPS: &str = "EPS";
/// Depreciation charge.
pub const DEPRECIATION: &str = "Depreciation";
