//! Binance Configuration

use crate::adapters::types::DEFAULT_ORDERBOOK_DEPTH;

// =============================================================================
// Constants
// =============================================================================

/// Production REST base URL
const MAINNET_REST_URL: &str = "https://api.binance.com";

/// Depth limits accepted by `/api/v3/depth`
const VALID_DEPTH_LIMITS: [usize; 8] = [5, 10, 20, 50, 100, 500, 1000, 5000];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for Binance public market data
#[derive(Debug, Clone)]
pub struct BinanceConfig {
    /// REST base URL (overridable for tests)
    pub base_url: String,
    /// Levels requested per book side
    pub depth: usize,
}

impl Default for BinanceConfig {
    fn default() -> Self {
        Self {
            base_url: MAINNET_REST_URL.to_string(),
            depth: DEFAULT_ORDERBOOK_DEPTH,
        }
    }
}

impl BinanceConfig {
    /// Create configuration from environment variables
    ///
    /// `BINANCE_REST_URL` overrides the base URL.
    pub fn from_env() -> Self {
        let base_url = std::env::var("BINANCE_REST_URL")
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

    /// Smallest depth limit Binance accepts that covers `depth`
    pub fn depth_limit(&self) -> usize {
        VALID_DEPTH_LIMITS
            .iter()
            .copied()
            .find(|limit| *limit >= self.depth)
            .unwrap_or(5000)
    }

    pub fn exchange_info_url(&self) -> String {
        format!("{}/api/v3/exchangeInfo", self.base_url.trim_end_matches('/'))
    }

    pub fn depth_url(&self) -> String {
        format!("{}/api/v3/depth", self.base_url.trim_end_matches('/'))
    }
}
