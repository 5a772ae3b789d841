//! Per-venue market catalog
//!
//! Maps the engine's normalized `BASE/QUOTE` symbols onto the venue's own
//! wire symbols (`BTCUSDT`, `BTC-USDT`, `BTC_USDT`). A pair missing from the
//! catalog is unavailable on the venue and is rejected without a network
//! round trip, which keeps the inverse-pair fallback cheap.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::adapters::errors::{ExchangeError, ExchangeResult};

/// Catalog of tradeable markets for one venue
#[derive(Debug, Default)]
pub struct MarketCatalog {
    venue: String,
    markets: RwLock<HashMap<String, String>>,
}

impl MarketCatalog {
    pub fn new(venue: &str) -> Self {
        Self {
            venue: venue.to_string(),
            markets: RwLock::new(HashMap::new()),
        }
    }

    /// Replace the catalog content and return the normalized symbols
    pub async fn replace(&self, entries: HashMap<String, String>) -> Vec<String> {
        let mut symbols: Vec<String> = entries.keys().cloned().collect();
        symbols.sort();
        *self.markets.write().await = entries;
        symbols
    }

    /// Resolve a normalized symbol into the venue's wire symbol
    pub async fn resolve(&self, symbol: &str) -> ExchangeResult<String> {
        self.markets
            .read()
            .await
            .get(symbol)
            .cloned()
            .ok_or_else(|| ExchangeError::MarketUnavailable {
                venue: self.venue.clone(),
                symbol: symbol.to_string(),
            })
    }
}
