//! Binance spot adapter (public REST)

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::adapters::binance::config::BinanceConfig;
use crate::adapters::binance::types::{BinanceDepth, BinanceExchangeInfo};
use crate::adapters::errors::ExchangeResult;
use crate::adapters::shared::{get_json, MarketCatalog};
use crate::adapters::traits::VenueAdapter;
use crate::adapters::types::{create_http_client, Orderbook};

const VENUE: &str = "binance";

/// Binance spot market data adapter
#[derive(Debug)]
pub struct BinanceAdapter {
    config: BinanceConfig,
    http_client: reqwest::Client,
    catalog: MarketCatalog,
}

impl BinanceAdapter {
    pub fn new(config: BinanceConfig) -> Self {
        Self {
            config,
            http_client: create_http_client(VENUE),
            catalog: MarketCatalog::new(VENUE),
        }
    }
}

#[async_trait]
impl VenueAdapter for BinanceAdapter {
    fn venue_name(&self) -> &str {
        VENUE
    }

    async fn list_symbols(&self) -> ExchangeResult<Vec<String>> {
        let info: BinanceExchangeInfo = get_json(
            &self.http_client,
            VENUE,
            &self.config.exchange_info_url(),
            &[],
            None,
        )
        .await?;

        let entries: HashMap<String, String> = info
            .symbols
            .iter()
            .filter_map(|s| s.normalized().map(|n| (n, s.symbol.clone())))
            .collect();

        let symbols = self.catalog.replace(entries).await;
        info!(venue = VENUE, markets = symbols.len(), "Catalog loaded");
        Ok(symbols)
    }

    async fn fetch_orderbook(&self, symbol: &str) -> ExchangeResult<Orderbook> {
        let wire_symbol = self.catalog.resolve(symbol).await?;
        debug!(venue = VENUE, symbol = %symbol, wire_symbol = %wire_symbol, "Fetching depth");

        let depth: BinanceDepth = get_json(
            &self.http_client,
            VENUE,
            &self.config.depth_url(),
            &[
                ("symbol", wire_symbol),
                ("limit", self.config.depth_limit().to_string()),
            ],
            Some(symbol),
        )
        .await?;

        depth.to_orderbook(self.config.depth)
    }
}
