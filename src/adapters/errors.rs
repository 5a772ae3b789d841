//! Venue adapter error types
//!
//! All venue-related errors are wrapped in ExchangeError. The quote fetcher
//! treats every variant as "this venue cannot serve this pair right now" and
//! moves on to the next orientation or venue.

use thiserror::Error;

use crate::adapters::types::HTTP_TIMEOUT_SECS;

/// Venue-specific error types for adapter operations
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The venue does not list the requested pair (or listed no catalog yet)
    #[error("Market {symbol} unavailable on {venue}")]
    MarketUnavailable { venue: String, symbol: String },

    /// Connection to venue failed (DNS, TLS, refused, non-2xx status)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Network operation timed out
    #[error("Network timeout after {0}ms")]
    NetworkTimeout(u64),

    /// Invalid or unexpected response from venue
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Venue name not known to the adapter factory
    #[error("Unsupported venue: {0}")]
    UnsupportedVenue(String),
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ExchangeError::NetworkTimeout(HTTP_TIMEOUT_SECS * 1000)
        } else if err.is_decode() {
            ExchangeError::InvalidResponse(err.to_string())
        } else {
            ExchangeError::ConnectionFailed(err.to_string())
        }
    }
}

/// Result type alias for venue operations
pub type ExchangeResult<T> = std::result::Result<T, ExchangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_unavailable_display() {
        let err = ExchangeError::MarketUnavailable {
            venue: "kucoin".to_string(),
            symbol: "ETH/BTC".to_string(),
        };
        assert_eq!(err.to_string(), "Market ETH/BTC unavailable on kucoin");
    }

    #[test]
    fn test_connection_failed_display() {
        let err = ExchangeError::ConnectionFailed("refused".to_string());
        assert_eq!(err.to_string(), "Connection failed: refused");
    }

    #[test]
    fn test_network_timeout_display() {
        let err = ExchangeError::NetworkTimeout(5000);
        assert_eq!(err.to_string(), "Network timeout after 5000ms");
    }

    #[test]
    fn test_invalid_response_display() {
        let err = ExchangeError::InvalidResponse("malformed JSON".to_string());
        assert_eq!(err.to_string(), "Invalid response: malformed JSON");
    }

    #[tokio::test]
    async fn test_reqwest_timeout_maps_to_network_timeout() {
        // Accepts the connection and never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let holder = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
        });

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(50))
            .build()
            .unwrap();
        let err = client
            .get(format!("http://{addr}/api/v3/depth"))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_timeout());

        let mapped = ExchangeError::from(err);
        assert!(
            matches!(mapped, ExchangeError::NetworkTimeout(ms) if ms == HTTP_TIMEOUT_SECS * 1000),
            "got {mapped:?}"
        );
        holder.abort();
    }

    #[tokio::test]
    async fn test_reqwest_connect_refused_maps_to_connection_failed() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = reqwest::get(format!("http://{addr}/")).await.unwrap_err();
        assert!(matches!(
            ExchangeError::from(err),
            ExchangeError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_unsupported_venue_display() {
        let err = ExchangeError::UnsupportedVenue("mtgox".to_string());
        assert_eq!(err.to_string(), "Unsupported venue: mtgox");
    }
}
