//! Core data types for venue adapters
//!
//! These types are used across all venue adapters for consistent
//! orderbook representation and HTTP client setup.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::adapters::errors::{ExchangeError, ExchangeResult};

// =============================================================================
// HTTP Client Constants
// =============================================================================

/// HTTP request timeout (seconds); the scanner applies its own per-fetch bound on top
pub(crate) const HTTP_TIMEOUT_SECS: u64 = 15;
/// HTTP connection timeout (milliseconds); fail fast if host unreachable
const HTTP_CONNECT_TIMEOUT_MS: u64 = 3000;
/// Max idle connections per host in connection pool
const HTTP_POOL_MAX_IDLE: usize = 16;
/// How long idle connections stay in the pool (seconds)
const HTTP_POOL_IDLE_TIMEOUT_SECS: u64 = 60;
/// TCP keepalive interval (seconds)
const HTTP_TCP_KEEPALIVE_SECS: u64 = 30;

/// Create a pooled HTTP client for a venue's public REST API
///
/// One client per venue; the worker pool issues many concurrent book
/// requests against the same host, so idle connections are kept warm.
pub fn create_http_client(venue_name: &str) -> reqwest::Client {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE)
        .pool_idle_timeout(Duration::from_secs(HTTP_POOL_IDLE_TIMEOUT_SECS))
        .tcp_keepalive(Duration::from_secs(HTTP_TCP_KEEPALIVE_SECS))
        .connect_timeout(Duration::from_millis(HTTP_CONNECT_TIMEOUT_MS))
        .tcp_nodelay(true)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());
    tracing::debug!(
        phase = "init",
        venue = %venue_name,
        timeout_s = HTTP_TIMEOUT_SECS,
        connect_timeout_ms = HTTP_CONNECT_TIMEOUT_MS,
        pool_max_idle = HTTP_POOL_MAX_IDLE,
        "HTTP client configured"
    );
    client
}

/// Default number of orderbook levels requested per side
pub const DEFAULT_ORDERBOOK_DEPTH: usize = 5;

/// Build the normalized `BASE/QUOTE` symbol used throughout the engine
pub fn normalize_symbol(base: &str, quote: &str) -> String {
    format!(
        "{}/{}",
        base.trim().to_uppercase(),
        quote.trim().to_uppercase()
    )
}

/// Parse up to `depth` raw `["price", "quantity"]` levels for one book side
///
/// Any malformed level fails the whole snapshot: a half-parsed side would
/// silently shift the best price.
pub fn parse_levels(raw: &[Vec<String>], depth: usize, side: &str) -> ExchangeResult<Vec<OrderbookLevel>> {
    raw.iter()
        .take(depth)
        .map(|level| {
            OrderbookLevel::from_strings(level).ok_or_else(|| {
                ExchangeError::InvalidResponse(format!("Invalid {} level: {:?}", side, level))
            })
        })
        .collect()
}

// =============================================================================
// Orderbook Types
// =============================================================================

/// A single level in the orderbook (price + quantity)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderbookLevel {
    /// Price at this level
    pub price: f64,
    /// Quantity available at this price
    pub quantity: f64,
}

impl OrderbookLevel {
    /// Create a new orderbook level
    pub fn new(price: f64, quantity: f64) -> Self {
        Self { price, quantity }
    }

    /// Parse a `["price", "quantity", ...]` string level as returned by
    /// Binance, KuCoin and Gate.io. Extra trailing fields are ignored.
    pub fn from_strings(raw: &[String]) -> Option<Self> {
        let price = raw.first()?.parse::<f64>().ok()?;
        let quantity = raw.get(1)?.parse::<f64>().ok()?;
        if !price.is_finite() || !quantity.is_finite() {
            return None;
        }
        Some(Self::new(price, quantity))
    }
}

/// Orderbook snapshot with bid and ask levels
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Orderbook {
    /// Bid levels sorted descending by price (best bid first)
    pub bids: Vec<OrderbookLevel>,
    /// Ask levels sorted ascending by price (best ask first)
    pub asks: Vec<OrderbookLevel>,
    /// Timestamp in Unix milliseconds
    pub timestamp: u64,
}

impl Orderbook {
    /// Create a new empty orderbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the best bid price (highest bid)
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.first().map(|l| l.price)
    }

    /// Get the best ask price (lowest ask)
    pub fn best_ask(&self) -> Option<f64> {
        self.asks.first().map(|l| l.price)
    }
}

/// Get current time in milliseconds since epoch.
#[inline]
pub fn current_time_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}
