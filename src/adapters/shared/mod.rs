//! Shared building blocks for REST venue adapters
//!
//! - `catalog`: normalized-symbol → venue-symbol map loaded once at startup
//! - `rest`: JSON GET helper with status → `ExchangeError` mapping

pub mod catalog;
pub mod rest;

pub use catalog::MarketCatalog;
pub use rest::get_json;
