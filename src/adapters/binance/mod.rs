//! Binance spot venue adapter module
//!
//! Public REST market data only: exchange info for the catalog and
//! `/api/v3/depth` snapshots for quotes.

pub mod adapter;
pub mod config;
pub mod types;

pub use adapter::BinanceAdapter;
pub use config::BinanceConfig;
