//! Venue adapter trait definition
//!
//! The VenueAdapter trait is the only seam between the scan engine and the
//! outside world. It combines the two collaborator roles the engine needs:
//! a market catalog (`list_symbols`) and an order book source
//! (`fetch_orderbook`).

use async_trait::async_trait;

use crate::adapters::errors::ExchangeResult;
use crate::adapters::types::Orderbook;

/// Common trait for all venue adapters
///
/// Methods take `&self` so one adapter can be shared behind an `Arc` by every
/// worker of a scan. Implementations keep any catalog state behind interior
/// mutability.
///
/// # Example Implementation
///
/// ```ignore
/// use async_trait::async_trait;
///
/// struct StaticVenue {
///     books: HashMap<String, Orderbook>,
/// }
///
/// #[async_trait]
/// impl VenueAdapter for StaticVenue {
///     fn venue_name(&self) -> &str { "static" }
///
///     async fn list_symbols(&self) -> ExchangeResult<Vec<String>> {
///         Ok(self.books.keys().cloned().collect())
///     }
///
///     async fn fetch_orderbook(&self, symbol: &str) -> ExchangeResult<Orderbook> {
///         self.books.get(symbol).cloned().ok_or_else(|| ExchangeError::MarketUnavailable {
///             venue: "static".into(),
///             symbol: symbol.into(),
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait VenueAdapter: Send + Sync {
    /// Venue identifier (e.g., "binance", "kucoin")
    ///
    /// This is the id reported in quotes and opportunities.
    fn venue_name(&self) -> &str;

    /// Load the venue's tradeable spot symbols as normalized `BASE/QUOTE` strings
    ///
    /// Called once per venue at startup. Adapters that need a mapping from
    /// normalized symbols to their own wire format populate it here.
    async fn list_symbols(&self) -> ExchangeResult<Vec<String>>;

    /// Fetch a fresh order book snapshot for a normalized `BASE/QUOTE` symbol
    ///
    /// # Returns
    /// * `Ok(Orderbook)` - asks cheapest-first, bids highest-first; either side may be empty
    /// * `Err(ExchangeError::MarketUnavailable)` - the venue does not list this pair
    /// * `Err(...)` - transport or decoding failure
    async fn fetch_orderbook(&self, symbol: &str) -> ExchangeResult<Orderbook>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::errors::ExchangeError;
    use crate::adapters::test_utils::MockVenue;

    #[tokio::test]
    async fn test_mock_venue_lists_its_books() {
        let venue = MockVenue::new("mock")
            .with_book("BTC/USDT", Some(50_010.0), Some(50_000.0))
            .with_book("ETH/USDT", Some(3_001.0), Some(3_000.0));

        let mut symbols = venue.list_symbols().await.unwrap();
        symbols.sort();
        assert_eq!(symbols, vec!["BTC/USDT".to_string(), "ETH/USDT".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_venue_unknown_pair_is_unavailable() {
        let venue = MockVenue::new("mock").with_book("BTC/USDT", Some(1.0), Some(1.0));
        let err = venue.fetch_orderbook("USDT/BTC").await.unwrap_err();
        assert!(matches!(err, ExchangeError::MarketUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_mock_venue_name() {
        let venue = MockVenue::new("alpha");
        assert_eq!(venue.venue_name(), "alpha");
    }
}
