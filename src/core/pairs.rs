//! Market pair parsing and currency-universe filtering
//!
//! Venue adapters hand over symbols already normalised to `BASE/QUOTE`.
//! Tickers are opaque: they are compared byte for byte and never rewritten,
//! so every pair that survives the filter is a symbol some venue listed.
//! Everything that does not split into two distinct currencies of the
//! configured universe is dropped here, before any graph is built.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a raw symbol is not a usable market pair
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairError {
    /// No `/`, more than one `/`, or an empty token
    #[error("Malformed pair symbol: '{0}'")]
    Malformed(String),

    /// Base and quote are the same currency
    #[error("Pair '{0}' has identical base and quote")]
    SameCurrency(String),
}

/// An ordered `BASE/QUOTE` market
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarketPair {
    pub base: String,
    pub quote: String,
}

impl MarketPair {
    /// Build a pair from two tickers, taken as-is
    pub fn new(base: &str, quote: &str) -> Result<Self, PairError> {
        if base.is_empty() || quote.is_empty() {
            return Err(PairError::Malformed(format!("{}/{}", base, quote)));
        }
        if base == quote {
            return Err(PairError::SameCurrency(format!("{}/{}", base, quote)));
        }
        Ok(Self {
            base: base.to_string(),
            quote: quote.to_string(),
        })
    }

    /// The same market seen from the other side (`QUOTE/BASE`)
    pub fn inverse(&self) -> Self {
        Self {
            base: self.quote.clone(),
            quote: self.base.clone(),
        }
    }

    /// Normalised symbol string passed to venue adapters
    pub fn symbol(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MarketPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for MarketPair {
    type Err = PairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split('/');
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(base), Some(quote), None) => MarketPair::new(base, quote)
                .map_err(|e| match e {
                    PairError::Malformed(_) => PairError::Malformed(s.to_string()),
                    other => other,
                }),
            _ => Err(PairError::Malformed(s.to_string())),
        }
    }
}

/// Keep only well-formed pairs whose both currencies are in `universe`
///
/// Membership is exact, so `stETH` and `STETH` are different currencies.
/// Malformed symbols are dropped silently. The result is independent of input
/// order, and every output pair renders back to one of the input symbols.
pub fn filter_pairs<I, S>(symbols: I, universe: &BTreeSet<String>) -> BTreeSet<MarketPair>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    symbols
        .into_iter()
        .filter_map(|raw| raw.as_ref().parse::<MarketPair>().ok())
        .filter(|pair| universe.contains(&pair.base) && universe.contains(&pair.quote))
        .collect()
}
