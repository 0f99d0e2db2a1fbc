pub mod config;
pub mod dashboard;
pub mod holdings;
pub mod logging;
pub mod market_data;
pub mod valuation;
