//! Adapter factory for dynamic venue selection
//!
//! Creates `VenueAdapter` instances from config strings.
//! Uses an enum-based dispatch pattern (no `Box<dyn>`) to preserve monomorphization.

use async_trait::async_trait;

use crate::adapters::binance::{BinanceAdapter, BinanceConfig};
use crate::adapters::errors::{ExchangeError, ExchangeResult};
use crate::adapters::gateio::{GateioAdapter, GateioConfig};
use crate::adapters::kucoin::{KucoinAdapter, KucoinConfig};
use crate::adapters::traits::VenueAdapter;
use crate::adapters::types::Orderbook;

// =============================================================================
// AnyVenue: enum-based dispatch for dynamic venue selection
// =============================================================================

/// Enum wrapping all concrete adapter types for runtime dispatch.
#[derive(Debug)]
pub enum AnyVenue {
    Binance(BinanceAdapter),
    Kucoin(KucoinAdapter),
    Gateio(GateioAdapter),
}

/// Macro to reduce boilerplate for delegating trait methods
macro_rules! delegate {
    ($self:expr, $method:ident ( $($arg:expr),* )) => {
        match $self {
            AnyVenue::Binance(a) => a.$method($($arg),*),
            AnyVenue::Kucoin(a) => a.$method($($arg),*),
            AnyVenue::Gateio(a) => a.$method($($arg),*),
        }
    };
    (await $self:expr, $method:ident ( $($arg:expr),* )) => {
        match $self {
            AnyVenue::Binance(a) => a.$method($($arg),*).await,
            AnyVenue::Kucoin(a) => a.$method($($arg),*).await,
            AnyVenue::Gateio(a) => a.$method($($arg),*).await,
        }
    };
}

#[async_trait]
impl VenueAdapter for AnyVenue {
    fn venue_name(&self) -> &str {
        delegate!(self, venue_name())
    }

    async fn list_symbols(&self) -> ExchangeResult<Vec<String>> {
        delegate!(await self, list_symbols())
    }

    async fn fetch_orderbook(&self, symbol: &str) -> ExchangeResult<Orderbook> {
        delegate!(await self, fetch_orderbook(symbol))
    }
}

// =============================================================================
// Factory
// =============================================================================

/// Venue ids accepted by [`create_venue`]
pub const SUPPORTED_VENUES: &[&str] = &["binance", "kucoin", "gateio"];

/// Create a venue adapter from its config name
///
/// Names are case-insensitive; `gate` is accepted as an alias for `gateio`.
/// Base URLs come from `<VENUE>_REST_URL` env vars when set.
pub fn create_venue(name: &str, depth: usize) -> ExchangeResult<AnyVenue> {
    match name.trim().to_lowercase().as_str() {
        "binance" => Ok(AnyVenue::Binance(BinanceAdapter::new(
            BinanceConfig::from_env().with_depth(depth),
        ))),
        "kucoin" => Ok(AnyVenue::Kucoin(KucoinAdapter::new(
            KucoinConfig::from_env().with_depth(depth),
        ))),
        "gateio" | "gate" => Ok(AnyVenue::Gateio(GateioAdapter::new(
            GateioConfig::from_env().with_depth(depth),
        ))),
        _ => Err(ExchangeError::UnsupportedVenue(name.to_string())),
    }
}
