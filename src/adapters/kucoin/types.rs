//! KuCoin Types
//!
//! Every KuCoin REST response is wrapped in `{"code": "200000", "data": ...}`.
//! A non-success code comes with `data: null` and a `msg`.

use serde::Deserialize;

use crate::adapters::errors::{ExchangeError, ExchangeResult};
use crate::adapters::types::{current_time_ms, normalize_symbol, parse_levels, Orderbook};

/// Response code KuCoin uses for success
pub const SUCCESS_CODE: &str = "200000";

/// Generic KuCoin response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct KucoinResponse<T> {
    pub code: String,
    #[serde(default)]
    pub msg: Option<String>,
    pub data: Option<T>,
}

impl<T> KucoinResponse<T> {
    /// Unwrap the payload, mapping error codes onto `ExchangeError`
    ///
    /// `symbol` is the normalized symbol being fetched, if any: a failed
    /// book request means the market is unavailable.
    pub fn into_data(self, symbol: Option<&str>) -> ExchangeResult<T> {
        match (self.code.as_str(), self.data, symbol) {
            (SUCCESS_CODE, Some(data), _) => Ok(data),
            (_, _, Some(symbol)) => Err(ExchangeError::MarketUnavailable {
                venue: "kucoin".to_string(),
                symbol: symbol.to_string(),
            }),
            (code, _, None) => Err(ExchangeError::InvalidResponse(format!(
                "kucoin code {}: {}",
                code,
                self.msg.unwrap_or_default()
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KucoinSymbol {
    /// Wire symbol (e.g. "BTC-USDT")
    pub symbol: String,
    pub base_currency: String,
    pub quote_currency: String,
    #[serde(default)]
    pub enable_trading: bool,
}

impl KucoinSymbol {
    pub fn normalized(&self) -> Option<String> {
        self.enable_trading
            .then(|| normalize_symbol(&self.base_currency, &self.quote_currency))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct KucoinOrderbook {
    #[serde(default)]
    pub time: u64,
    #[serde(default)]
    pub bids: Vec<Vec<String>>,
    #[serde(default)]
    pub asks: Vec<Vec<String>>,
}

impl KucoinOrderbook {
    /// Convert to our canonical Orderbook type
    pub fn to_orderbook(&self, depth: usize) -> ExchangeResult<Orderbook> {
        Ok(Orderbook {
            bids: parse_levels(&self.bids, depth, "bid")?,
            asks: parse_levels(&self.asks, depth, "ask")?,
            timestamp: if self.time > 0 { self.time } else { current_time_ms() },
        })
    }
}
