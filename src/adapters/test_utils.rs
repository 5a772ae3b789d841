//! Shared test utilities for adapter and engine testing
//!
//! Provides a configurable in-memory `MockVenue` used by the quote fetcher,
//! evaluator and scanner test modules.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::adapters::errors::{ExchangeError, ExchangeResult};
use crate::adapters::traits::VenueAdapter;
use crate::adapters::types::{Orderbook, OrderbookLevel};

/// In-memory venue with fully scripted books
#[derive(Debug)]
pub struct MockVenue {
    /// Venue name returned by `venue_name()`
    pub name: String,
    /// Books keyed by normalized symbol
    pub books: HashMap<String, Orderbook>,
    /// When true, every call fails with `ConnectionFailed`
    pub should_fail: bool,
    /// Simulated latency applied to every `fetch_orderbook`
    pub latency: Option<Duration>,
    /// Number of `fetch_orderbook` calls (thread-safe for concurrent tests)
    pub fetch_count: Arc<AtomicUsize>,
    /// Symbols requested, in call order
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockVenue {
    /// Create an empty venue with the given name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            books: HashMap::new(),
            should_fail: false,
            latency: None,
            fetch_count: Arc::new(AtomicUsize::new(0)),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a venue whose every call fails
    pub fn failing(name: &str) -> Self {
        let mut venue = Self::new(name);
        venue.should_fail = true;
        venue
    }

    /// Add a book with a single level on each present side
    pub fn with_book(mut self, symbol: &str, ask: Option<f64>, bid: Option<f64>) -> Self {
        let book = Orderbook {
            asks: ask.map(|p| vec![OrderbookLevel::new(p, 1.0)]).unwrap_or_default(),
            bids: bid.map(|p| vec![OrderbookLevel::new(p, 1.0)]).unwrap_or_default(),
            timestamp: 0,
        };
        self.books.insert(symbol.to_string(), book);
        self
    }

    /// Delay every fetch by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait]
impl VenueAdapter for MockVenue {
    fn venue_name(&self) -> &str {
        &self.name
    }

    async fn list_symbols(&self) -> ExchangeResult<Vec<String>> {
        if self.should_fail {
            return Err(ExchangeError::ConnectionFailed("mock failure".to_string()));
        }
        Ok(self.books.keys().cloned().collect())
    }

    async fn fetch_orderbook(&self, symbol: &str) -> ExchangeResult<Orderbook> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(symbol.to_string());
        }

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        if self.should_fail {
            return Err(ExchangeError::ConnectionFailed("mock failure".to_string()));
        }

        self.books
            .get(symbol)
            .cloned()
            .ok_or_else(|| ExchangeError::MarketUnavailable {
                venue: self.name.clone(),
                symbol: symbol.to_string(),
            })
    }
}
