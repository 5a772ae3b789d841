//! KuCoin Configuration

use crate::adapters::types::DEFAULT_ORDERBOOK_DEPTH;

/// Production REST base URL
const MAINNET_REST_URL: &str = "https://api.kucoin.com";

/// Configuration for KuCoin public market data
#[derive(Debug, Clone)]
pub struct KucoinConfig {
    /// REST base URL (overridable for tests)
    pub base_url: String,
    /// Levels kept per book side (KuCoin always serves 20)
    pub depth: usize,
}

impl Default for KucoinConfig {
    fn default() -> Self {
        Self {
            base_url: MAINNET_REST_URL.to_string(),
            depth: DEFAULT_ORDERBOOK_DEPTH,
        }
    }
}

impl KucoinConfig {
    /// Create configuration from environment variables
    ///
    /// `KUCOIN_REST_URL` overrides the base URL.
    pub fn from_env() -> Self {
        let base_url = std::env::var("KUCOIN_REST_URL")
            .unwrap_or_else(|_| MAINNET_REST_URL.to_string());
        Self {
            base_url,
            ..Default::default()
        }
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn symbols_url(&self) -> String {
        format!("{}/api/v1/symbols", self.base_url.trim_end_matches('/'))
    }

    pub fn orderbook_url(&self) -> String {
        format!(
            "{}/api/v1/market/orderbook/level2_20",
            self.base_url.trim_end_matches('/')
        )
    }
}
