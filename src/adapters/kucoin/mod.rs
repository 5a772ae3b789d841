//! KuCoin spot venue adapter module
//!
//! Public REST market data: `/api/v1/symbols` for the catalog and
//! `/api/v1/market/orderbook/level2_20` for quotes.

pub mod adapter;
pub mod config;
pub mod types;

pub use adapter::KucoinAdapter;
pub use config::KucoinConfig;
