//! Leverage ratios - how much of the business is financed by debt
//!
//! A rising debt-to-equity ratio means creditors fund a growing share of the
//! balance sheet; a rising interest expense ratio means debt service eats a
//! growing share of operating profit.

pub mod debt_to_equity;
pub mod interest_expense;

pub use debt_to_equity::DebtToEquity;
pub use interest_expense::InterestExpense;
