//! Best bid/ask retrieval with venue fallback
//!
//! For one market pair the fetcher walks the venue list in priority order.
//! On each venue it tries the direct market first, then the inverse market
//! (inverting its prices), then moves to the next venue. The first venue that
//! answers wins; quotes are never cached across calls.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::adapters::errors::{ExchangeError, ExchangeResult};
use crate::adapters::traits::VenueAdapter;
use crate::adapters::types::Orderbook;
use crate::core::pairs::MarketPair;

// =============================================================================
// Quote
// =============================================================================

/// Best prices for one market on one venue; either side may be absent
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub ask: Option<f64>,
    pub bid: Option<f64>,
    pub venue: Arc<str>,
}

impl Quote {
    /// Top of book; an empty side is an absent price
    pub fn from_book(venue: Arc<str>, book: &Orderbook) -> Self {
        Self {
            ask: book.best_ask(),
            bid: book.best_bid(),
            venue,
        }
    }

    /// Prices of the inverse market: ask' = 1/bid, bid' = 1/ask
    ///
    /// A zero or absent source price gives an absent inverted price.
    pub fn inverted(self) -> Self {
        let invert = |p: Option<f64>| p.filter(|v| *v != 0.0).map(|v| 1.0 / v);
        Self {
            ask: invert(self.bid),
            bid: invert(self.ask),
            venue: self.venue,
        }
    }

    /// At least one side carries a price
    pub fn is_usable(&self) -> bool {
        self.ask.is_some() || self.bid.is_some()
    }
}

// =============================================================================
// Fetch State Machine
// =============================================================================

/// Position in the venue fallback chain
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// Try the direct market on venue `i`
    TryDirect(usize),
    /// Direct market failed on venue `i`; try the inverse market
    TryInverse(usize),
    Succeeded(Quote),
    /// Every venue failed both orientations
    Exhausted,
}

// =============================================================================
// Quote Fetcher
// =============================================================================

/// Fetches quotes from an ordered, shared list of venues
pub struct QuoteFetcher<V> {
    venues: Arc<[V]>,
    fetch_timeout: Duration,
}

impl<V> Clone for QuoteFetcher<V> {
    fn clone(&self) -> Self {
        Self {
            venues: Arc::clone(&self.venues),
            fetch_timeout: self.fetch_timeout,
        }
    }
}

impl<V: VenueAdapter> QuoteFetcher<V> {
    pub fn new(venues: impl Into<Arc<[V]>>, fetch_timeout: Duration) -> Self {
        Self {
            venues: venues.into(),
            fetch_timeout,
        }
    }

    pub fn venue_count(&self) -> usize {
        self.venues.len()
    }

    /// Best bid/ask for `pair`, or `None` when no venue serves it either way
    pub async fn fetch(&self, pair: &MarketPair) -> Option<Quote> {
        let direct = pair.symbol();
        let inverse = pair.inverse().symbol();
        let mut state = FetchState::TryDirect(0);

        loop {
            state = match state {
                FetchState::TryDirect(i) => match self.venues.get(i) {
                    None => FetchState::Exhausted,
                    Some(venue) => match self.fetch_book(venue, &direct).await {
                        Ok(book) => FetchState::Succeeded(Quote::from_book(venue_id(venue), &book)),
                        Err(e) => {
                            debug!(venue = %venue.venue_name(), symbol = %direct, error = %e, "Direct market failed");
                            FetchState::TryInverse(i)
                        }
                    },
                },
                FetchState::TryInverse(i) => match self.venues.get(i) {
                    None => FetchState::Exhausted,
                    Some(venue) => match self.fetch_book(venue, &inverse).await {
                        Ok(book) => FetchState::Succeeded(
                            Quote::from_book(venue_id(venue), &book).inverted(),
                        ),
                        Err(e) => {
                            debug!(venue = %venue.venue_name(), symbol = %inverse, error = %e, "Inverse market failed");
                            FetchState::TryDirect(i + 1)
                        }
                    },
                },
                FetchState::Succeeded(quote) => return Some(quote),
                FetchState::Exhausted => {
                    debug!(symbol = %direct, venues = self.venues.len(), "No venue serves pair");
                    return None;
                }
            };
        }
    }

    async fn fetch_book(&self, venue: &V, symbol: &str) -> ExchangeResult<Orderbook> {
        match tokio::time::timeout(self.fetch_timeout, venue.fetch_orderbook(symbol)).await {
            Ok(result) => result,
            Err(_) => Err(ExchangeError::NetworkTimeout(
                self.fetch_timeout.as_millis() as u64,
            )),
        }
    }
}

fn venue_id<V: VenueAdapter>(venue: &V) -> Arc<str> {
    Arc::from(venue.venue_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::test_utils::MockVenue;

    const TIMEOUT: Duration = Duration::from_millis(500);

    fn pair(s: &str) -> MarketPair {
        s.parse().unwrap()
    }

    fn fetcher(venues: Vec<MockVenue>) -> QuoteFetcher<MockVenue> {
        QuoteFetcher::new(venues, TIMEOUT)
    }

    #[test]
    fn test_inverted_prices() {
        let quote = Quote {
            ask: Some(4.0),
            bid: Some(2.0),
            venue: Arc::from("v"),
        }
        .inverted();
        assert_eq!(quote.ask, Some(0.5));
        assert_eq!(quote.bid, Some(0.25));
    }

    #[test]
    fn test_inverted_zero_or_missing_is_absent() {
        let quote = Quote {
            ask: None,
            bid: Some(0.0),
            venue: Arc::from("v"),
        }
        .inverted();
        assert_eq!(quote.ask, None);
        assert_eq!(quote.bid, None);
        assert!(!quote.is_usable());
    }

    #[tokio::test]
    async fn test_direct_market_on_first_venue() {
        let f = fetcher(vec![
            MockVenue::new("alpha").with_book("ETH/BTC", Some(0.051), Some(0.05)),
            MockVenue::new("beta").with_book("ETH/BTC", Some(9.0), Some(9.0)),
        ]);
        let quote = f.fetch(&pair("ETH/BTC")).await.unwrap();
        assert_eq!(quote.ask, Some(0.051));
        assert_eq!(quote.bid, Some(0.05));
        assert_eq!(&*quote.venue, "alpha");
    }

    #[tokio::test]
    async fn test_inverse_fallback() {
        let venue = MockVenue::new("alpha").with_book("BTC/ETH", Some(20.0), Some(16.0));
        let f = fetcher(vec![venue]);

        let quote = f.fetch(&pair("ETH/BTC")).await.unwrap();
        assert_eq!(quote.ask, Some(1.0 / 16.0));
        assert_eq!(quote.bid, Some(1.0 / 20.0));
    }

    #[tokio::test]
    async fn test_next_venue_after_both_orientations_fail() {
        let alpha = MockVenue::new("alpha");
        let alpha_requests = alpha.requested.clone();
        let f = fetcher(vec![
            alpha,
            MockVenue::new("beta").with_book("ETH/BTC", Some(0.06), None),
        ]);

        let quote = f.fetch(&pair("ETH/BTC")).await.unwrap();
        assert_eq!(&*quote.venue, "beta");
        assert_eq!(quote.bid, None);
        assert_eq!(
            *alpha_requests.lock().unwrap(),
            vec!["ETH/BTC".to_string(), "BTC/ETH".to_string()]
        );
    }

    #[tokio::test]
    async fn test_empty_book_still_stops_the_chain() {
        let beta = MockVenue::new("beta").with_book("ETH/BTC", Some(1.0), Some(1.0));
        let beta_fetches = beta.fetch_count.clone();
        let f = fetcher(vec![
            MockVenue::new("alpha").with_book("ETH/BTC", None, None),
            beta,
        ]);

        let quote = f.fetch(&pair("ETH/BTC")).await.unwrap();
        assert_eq!(&*quote.venue, "alpha");
        assert!(!quote.is_usable());
        assert_eq!(beta_fetches.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_all_venues_exhausted() {
        let f = fetcher(vec![MockVenue::failing("alpha"), MockVenue::new("beta")]);
        assert!(f.fetch(&pair("ETH/BTC")).await.is_none());
    }

    #[tokio::test]
    async fn test_no_venues() {
        let f = fetcher(Vec::new());
        assert_eq!(f.venue_count(), 0);
        assert!(f.fetch(&pair("ETH/BTC")).await.is_none());
    }

    #[tokio::test]
    async fn test_slow_venue_times_out_and_falls_through() {
        let f = QuoteFetcher::new(
            vec![
                MockVenue::new("slow")
                    .with_book("ETH/BTC", Some(1.0), Some(1.0))
                    .with_latency(Duration::from_secs(30)),
                MockVenue::new("fast").with_book("ETH/BTC", Some(2.0), Some(1.5)),
            ],
            Duration::from_millis(20),
        );

        let quote = f.fetch(&pair("ETH/BTC")).await.unwrap();
        assert_eq!(&*quote.venue, "fast");
    }

    #[tokio::test]
    async fn test_fetch_is_deterministic() {
        let f = fetcher(vec![
            MockVenue::new("alpha").with_book("BTC/ETH", Some(20.0), Some(16.0)),
            MockVenue::new("beta").with_book("ETH/BTC", Some(0.06), Some(0.05)),
        ]);
        let first = f.fetch(&pair("ETH/BTC")).await;
        let second = f.fetch(&pair("ETH/BTC")).await;
        assert_eq!(first, second);
    }
}
