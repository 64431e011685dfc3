//! Efficiency ratios - how quickly working capital turns into sales and cash

pub mod debtor_days;
pub mod inventory_turnover;

pub use debtor_days::{DebtorDays, DebtorDaysConfig};
pub use inventory_turnover::InventoryTurnover;
