//! Profitability ratios - returns on capital and margins on sales
//!
//! Returns (ROE, ROCE) are plain quotients; margins are expressed in percent.

pub mod net_margin;
pub mod operating_margin;
pub mod roce;
pub mod roe;

pub use net_margin::NetProfitMargin;
pub use operating_margin::OperatingProfitMargin;
pub use roce::ReturnOnCapitalEmployed;
pub use roe::ReturnOnEquity;
