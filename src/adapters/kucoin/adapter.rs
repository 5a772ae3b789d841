//! KuCoin spot adapter (public REST)

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::adapters::errors::ExchangeResult;
use crate::adapters::kucoin::config::KucoinConfig;
use crate::adapters::kucoin::types::{KucoinOrderbook, KucoinResponse, KucoinSymbol};
use crate::adapters::shared::{get_json, MarketCatalog};
use crate::adapters::traits::VenueAdapter;
use crate::adapters::types::{create_http_client, Orderbook};

const VENUE: &str = "kucoin";

/// KuCoin spot market data adapter
#[derive(Debug)]
pub struct KucoinAdapter {
    config: KucoinConfig,
    http_client: reqwest::Client,
    catalog: MarketCatalog,
}

impl KucoinAdapter {
    pub fn new(config: KucoinConfig) -> Self {
        Self {
            config,
            http_client: create_http_client(VENUE),
            catalog: MarketCatalog::new(VENUE),
        }
    }
}

#[async_trait]
impl VenueAdapter for KucoinAdapter {
    fn venue_name(&self) -> &str {
        VENUE
    }

    async fn list_symbols(&self) -> ExchangeResult<Vec<String>> {
        let response: KucoinResponse<Vec<KucoinSymbol>> = get_json(
            &self.http_client,
            VENUE,
            &self.config.symbols_url(),
            &[],
            None,
        )
        .await?;

        let entries: HashMap<String, String> = response
            .into_data(None)?
            .iter()
            .filter_map(|s| s.normalized().map(|n| (n, s.symbol.clone())))
            .collect();

        let symbols = self.catalog.replace(entries).await;
        info!(venue = VENUE, markets = symbols.len(), "Catalog loaded");
        Ok(symbols)
    }

    async fn fetch_orderbook(&self, symbol: &str) -> ExchangeResult<Orderbook> {
        let wire_symbol = self.catalog.resolve(symbol).await?;
        debug!(venue = VENUE, symbol = %symbol, wire_symbol = %wire_symbol, "Fetching level2_20");

        let response: KucoinResponse<KucoinOrderbook> = get_json(
            &self.http_client,
            VENUE,
            &self.config.orderbook_url(),
            &[("symbol", wire_symbol)],
            Some(symbol),
        )
        .await?;

        response.into_data(Some(symbol))?.to_orderbook(self.config.depth)
    }
}
