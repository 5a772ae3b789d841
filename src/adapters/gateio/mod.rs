//! Gate.io spot venue adapter module
//!
//! Public REST market data: `/api/v4/spot/currency_pairs` for the catalog
//! and `/api/v4/spot/order_book` for quotes.

pub mod adapter;
pub mod config;
pub mod types;

pub use adapter::GateioAdapter;
pub use config::GateioConfig;
