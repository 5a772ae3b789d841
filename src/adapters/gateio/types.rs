//! Gate.io Types

use serde::Deserialize;

use crate::adapters::errors::ExchangeResult;
use crate::adapters::types::{current_time_ms, normalize_symbol, parse_levels, Orderbook};

const TRADABLE_STATUS: &str = "tradable";

#[derive(Debug, Clone, Deserialize)]
pub struct GateioCurrencyPair {
    /// Wire symbol (e.g. "BTC_USDT")
    pub id: String,
    pub base: String,
    pub quote: String,
    #[serde(default)]
    pub trade_status: String,
}

impl GateioCurrencyPair {
    pub fn normalized(&self) -> Option<String> {
        (self.trade_status == TRADABLE_STATUS).then(|| normalize_symbol(&self.base, &self.quote))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GateioOrderBook {
    /// Response generation time in milliseconds
    #[serde(default)]
    pub current: u64,
    #[serde(default)]
    pub bids: Vec<Vec<String>>,
    #[serde(default)]
    pub asks: Vec<Vec<String>>,
}

impl GateioOrderBook {
    /// Convert to our canonical Orderbook type
    pub fn to_orderbook(&self, depth: usize) -> ExchangeResult<Orderbook> {
        Ok(Orderbook {
            bids: parse_levels(&self.bids, depth, "bid")?,
            asks: parse_levels(&self.asks, depth, "ask")?,
            timestamp: if self.current > 0 { self.current } else { current_time_ms() },
        })
    }
}
