//! Gate.io Configuration

use crate::adapters::types::DEFAULT_ORDERBOOK_DEPTH;

/// Production REST base URL
const MAINNET_REST_URL: &str = "https://api.gateio.ws";

/// Configuration for Gate.io public market data
#[derive(Debug, Clone)]
pub struct GateioConfig {
    /// REST base URL (overridable for tests)
    pub base_url: String,
    /// Levels requested per book side
    pub depth: usize,
}

impl Default for GateioConfig {
    fn default() -> Self {
        Self {
            base_url: MAINNET_REST_URL.to_string(),
            depth: DEFAULT_ORDERBOOK_DEPTH,
        }
    }
}

impl GateioConfig {
    /// Create configuration from environment variables
    ///
    /// `GATEIO_REST_URL` overrides the base URL.
    pub fn from_env() -> Self {
        let base_url = std::env::var("GATEIO_REST_URL")
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

    pub fn currency_pairs_url(&self) -> String {
        format!("{}/api/v4/spot/currency_pairs", self.base_url.trim_end_matches('/'))
    }

    pub fn order_book_url(&self) -> String {
        format!("{}/api/v4/spot/order_book", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = GateioConfig::default();
        assert_eq!(
            config.order_book_url(),
            "https://api.gateio.ws/api/v4/spot/order_book"
        );
        assert_eq!(config.depth, DEFAULT_ORDERBOOK_DEPTH);
    }
}
