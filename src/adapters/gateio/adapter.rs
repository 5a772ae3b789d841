//! Gate.io spot adapter (public REST)

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::adapters::errors::ExchangeResult;
use crate::adapters::gateio::config::GateioConfig;
use crate::adapters::gateio::types::{GateioCurrencyPair, GateioOrderBook};
use crate::adapters::shared::{get_json, MarketCatalog};
use crate::adapters::traits::VenueAdapter;
use crate::adapters::types::{create_http_client, Orderbook};

const VENUE: &str = "gateio";

/// Gate.io spot market data adapter
#[derive(Debug)]
pub struct GateioAdapter {
    config: GateioConfig,
    http_client: reqwest::Client,
    catalog: MarketCatalog,
}

impl GateioAdapter {
    pub fn new(config: GateioConfig) -> Self {
        Self {
            config,
            http_client: create_http_client(VENUE),
            catalog: MarketCatalog::new(VENUE),
        }
    }
}

#[async_trait]
impl VenueAdapter for GateioAdapter {
    fn venue_name(&self) -> &str {
        VENUE
    }

    async fn list_symbols(&self) -> ExchangeResult<Vec<String>> {
        let pairs: Vec<GateioCurrencyPair> = get_json(
            &self.http_client,
            VENUE,
            &self.config.currency_pairs_url(),
            &[],
            None,
        )
        .await?;

        let entries: HashMap<String, String> = pairs
            .iter()
            .filter_map(|p| p.normalized().map(|n| (n, p.id.clone())))
            .collect();

        let symbols = self.catalog.replace(entries).await;
        info!(venue = VENUE, markets = symbols.len(), "Catalog loaded");
        Ok(symbols)
    }

    async fn fetch_orderbook(&self, symbol: &str) -> ExchangeResult<Orderbook> {
        let wire_symbol = self.catalog.resolve(symbol).await?;
        debug!(venue = VENUE, symbol = %symbol, wire_symbol = %wire_symbol, "Fetching order book");

        let book: GateioOrderBook = get_json(
            &self.http_client,
            VENUE,
            &self.config.order_book_url(),
            &[
                ("currency_pair", wire_symbol),
                ("limit", self.config.depth.to_string()),
            ],
            Some(symbol),
        )
        .await?;

        book.to_orderbook(self.config.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::errors::ExchangeError;
    use mockito::Matcher;

    const PAIRS: &str = r#"[
        {"id": "BTC_USDT", "base": "BTC", "quote": "USDT", "trade_status": "tradable"},
        {"id": "ETH_USDT", "base": "ETH", "quote": "USDT", "trade_status": "tradable"}
    ]"#;

    fn adapter_for(server: &mockito::ServerGuard) -> GateioAdapter {
        GateioAdapter::new(GateioConfig {
            base_url: server.url(),
            depth: 5,
        })
    }

    #[tokio::test]
    async fn test_fetch_orderbook_with_underscore_symbol() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v4/spot/currency_pairs")
            .with_status(200)
            .with_body(PAIRS)
            .create_async()
            .await;
        let book_mock = server
            .mock("GET", "/api/v4/spot/order_book")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("currency_pair".into(), "ETH_USDT".into()),
                Matcher::UrlEncoded("limit".into(), "5".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"current": 1700000000000, "asks": [["3001.5", "2"]], "bids": [["3000.5", "1"]]}"#)
            .create_async()
            .await;

        let adapter = adapter_for(&server);
        let symbols = adapter.list_symbols().await.unwrap();
        assert_eq!(symbols.len(), 2);

        let ob = adapter.fetch_orderbook("ETH/USDT").await.unwrap();
        assert_eq!(ob.best_ask(), Some(3001.5));
        assert_eq!(ob.best_bid(), Some(3000.5));
        book_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_pair_label_maps_to_unavailable() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v4/spot/currency_pairs")
            .with_status(200)
            .with_body(PAIRS)
            .create_async()
            .await;
        server
            .mock("GET", "/api/v4/spot/order_book")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(r#"{"label": "INVALID_CURRENCY_PAIR", "message": "Invalid currency pair"}"#)
            .create_async()
            .await;

        let adapter = adapter_for(&server);
        adapter.list_symbols().await.unwrap();
        let err = adapter.fetch_orderbook("BTC/USDT").await.unwrap_err();
        assert!(matches!(err, ExchangeError::MarketUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_garbage_body_is_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v4/spot/currency_pairs")
            .with_status(200)
            .with_body("<html>cloudflare</html>")
            .create_async()
            .await;

        let adapter = adapter_for(&server);
        let err = adapter.list_symbols().await.unwrap_err();
        assert!(matches!(err, ExchangeError::InvalidResponse(_)));
    }
}
