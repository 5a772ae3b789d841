//! Application-wide error types using thiserror
//!
//! Startup and bootstrap errors are wrapped in AppError. Errors raised while
//! scanning never reach this type: they degrade to missing quotes or
//! excluded triangles inside the engine.

use crate::adapters::errors::ExchangeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Exchange error: {0}")]
    Exchange(#[from] ExchangeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Startup could not produce anything to scan (e.g. no venue catalog loaded)
    #[error("Bootstrap error: {0}")]
    Bootstrap(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_error_converts_to_app_error() {
        let exchange_err = ExchangeError::MarketUnavailable {
            venue: "binance".into(),
            symbol: "BTC/USDT".into(),
        };
        let app_err: AppError = exchange_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Exchange error"), "Got: {}", msg);
        assert!(msg.contains("BTC/USDT"), "Got: {}", msg);
    }

    #[test]
    fn test_serde_error_converts_to_app_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_err: AppError = serde_err.into();
        assert!(app_err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_io_error_converts_to_app_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let app_err: AppError = io_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("IO error"), "Got: {}", msg);
        assert!(msg.contains("file missing"), "Got: {}", msg);
    }

    #[test]
    fn test_config_error_display() {
        let err = AppError::Config("workers must be > 0".into());
        assert_eq!(err.to_string(), "Configuration error: workers must be > 0");
    }

    #[test]
    fn test_bootstrap_error_display() {
        let err = AppError::Bootstrap("no venue catalog loaded".into());
        assert_eq!(err.to_string(), "Bootstrap error: no venue catalog loaded");
    }
}
