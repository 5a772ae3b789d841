//! Venue adapters for Binance, KuCoin and Gate.io
//!
//! This module provides the venue abstraction the scan engine talks to
//! (market catalog + order book source) and public REST implementations of it.

pub mod binance;
pub mod errors;
pub mod factory;
pub mod gateio;
pub mod kucoin;
pub mod manager;
pub mod shared;
pub mod traits;
pub mod types;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use errors::{ExchangeError, ExchangeResult};
pub use factory::{create_venue, AnyVenue};
pub use manager::{load_venues, LoadedVenues, VenueManager};
pub use traits::VenueAdapter;
pub use types::{Orderbook, OrderbookLevel};
