//! Binance Types
//!
//! REST response types for `/api/v3/exchangeInfo` and `/api/v3/depth`.
//!
//! Depth format: `{"lastUpdateId": 1, "bids": [["price", "qty"]], "asks": [...]}`
//! with bids descending and asks ascending.

use serde::Deserialize;

use crate::adapters::errors::ExchangeResult;
use crate::adapters::types::{current_time_ms, normalize_symbol, parse_levels, Orderbook};

/// Status of a symbol that can currently be traded
const TRADING_STATUS: &str = "TRADING";

#[derive(Debug, Clone, Deserialize)]
pub struct BinanceExchangeInfo {
    pub symbols: Vec<BinanceSymbol>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceSymbol {
    /// Wire symbol (e.g. "ETHBTC")
    pub symbol: String,
    pub status: String,
    pub base_asset: String,
    pub quote_asset: String,
    #[serde(default)]
    pub is_spot_trading_allowed: bool,
}

impl BinanceSymbol {
    /// Normalized `BASE/QUOTE` if the symbol is a live spot market
    pub fn normalized(&self) -> Option<String> {
        if self.status == TRADING_STATUS && self.is_spot_trading_allowed {
            Some(normalize_symbol(&self.base_asset, &self.quote_asset))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceDepth {
    #[allow(dead_code)]
    pub last_update_id: u64,
    #[serde(default)]
    pub bids: Vec<Vec<String>>,
    #[serde(default)]
    pub asks: Vec<Vec<String>>,
}

impl BinanceDepth {
    /// Convert to our canonical Orderbook type
    pub fn to_orderbook(&self, depth: usize) -> ExchangeResult<Orderbook> {
        Ok(Orderbook {
            bids: parse_levels(&self.bids, depth, "bid")?,
            asks: parse_levels(&self.asks, depth, "ask")?,
            timestamp: current_time_ms(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_info_parsing() {
        let json = r#"{
            "timezone": "UTC",
            "symbols": [
                {"symbol": "ETHBTC", "status": "TRADING", "baseAsset": "ETH", "quoteAsset": "BTC", "isSpotTradingAllowed": true},
                {"symbol": "LUNAUSDT", "status": "BREAK", "baseAsset": "LUNA", "quoteAsset": "USDT", "isSpotTradingAllowed": true},
                {"symbol": "BTCUSDT", "status": "TRADING", "baseAsset": "BTC", "quoteAsset": "USDT", "isSpotTradingAllowed": false}
            ]
        }"#;
        let info: BinanceExchangeInfo = serde_json::from_str(json).unwrap();
        let live: Vec<String> = info.symbols.iter().filter_map(|s| s.normalized()).collect();
        assert_eq!(live, vec!["ETH/BTC".to_string()]);
    }

    #[test]
    fn test_depth_to_orderbook() {
        let json = r#"{
            "lastUpdateId": 1027024,
            "bids": [["0.05210000", "431.00000000"], ["0.05200000", "12.00000000"]],
            "asks": [["0.05220000", "12.00000000"]]
        }"#;
        let depth: BinanceDepth = serde_json::from_str(json).unwrap();
        let ob = depth.to_orderbook(5).unwrap();
        assert_eq!(ob.best_bid(), Some(0.0521));
        assert_eq!(ob.best_ask(), Some(0.0522));
        assert_eq!(ob.bids.len(), 2);
    }

    #[test]
    fn test_depth_with_empty_side() {
        let json = r#"{"lastUpdateId": 1, "bids": [], "asks": [["1.5", "2"]]}"#;
        let depth: BinanceDepth = serde_json::from_str(json).unwrap();
        let ob = depth.to_orderbook(5).unwrap();
        assert_eq!(ob.best_bid(), None);
        assert_eq!(ob.best_ask(), Some(1.5));
    }
}
