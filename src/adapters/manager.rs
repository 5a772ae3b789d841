//! Venue manager: loads market catalogs for every configured venue.
//!
//! Calls `list_symbols` once per venue at startup, all venues concurrently.
//! A venue whose catalog fails to load is logged and dropped; the remaining
//! venues keep their configured priority order.

use std::collections::BTreeSet;

use futures_util::future::join_all;
use tracing::{info, warn};

use crate::adapters::errors::ExchangeResult;
use crate::adapters::factory::{create_venue, AnyVenue};
use crate::adapters::traits::VenueAdapter;
use crate::error::{AppError, Result};

/// Venues whose catalogs loaded, plus the union of their symbols
#[derive(Debug)]
pub struct LoadedVenues<V> {
    /// Venues in configured priority order
    pub venues: Vec<V>,
    /// Sorted, de-duplicated `BASE/QUOTE` symbols across all loaded venues
    pub symbols: Vec<String>,
    /// Names of venues whose catalog failed to load
    pub failed: Vec<String>,
}

impl<V: VenueAdapter> LoadedVenues<V> {
    /// Fail startup when no venue catalog loaded at all
    pub fn require_any(self) -> Result<Self> {
        if self.venues.is_empty() {
            return Err(AppError::Bootstrap(format!(
                "No venue catalog could be loaded (failed: {})",
                self.failed.join(", ")
            )));
        }
        if !self.failed.is_empty() {
            warn!(failed = ?self.failed, "Scanning without some venues");
        }
        Ok(self)
    }
}

/// Build the named venues and load their catalogs.
///
/// An unknown venue name surfaces as `AppError::Exchange`; a run where every
/// catalog failed surfaces as `AppError::Bootstrap`.
pub async fn load_venues(names: &[String], depth: usize) -> Result<LoadedVenues<AnyVenue>> {
    let manager = VenueManager::from_names(names, depth)?;
    info!(venues = manager.len(), depth, "Loading market catalogs");
    manager.load_catalogs().await.require_any()
}

/// Owns the configured venues until their catalogs are loaded.
pub struct VenueManager<V> {
    venues: Vec<V>,
}

impl VenueManager<AnyVenue> {
    /// Build adapters for the configured venue names.
    ///
    /// `names` - ordered venue ids (e.g. ["binance", "kucoin"])
    /// `depth` - order book levels requested per side
    pub fn from_names(names: &[String], depth: usize) -> ExchangeResult<Self> {
        let venues = names
            .iter()
            .map(|name| create_venue(name, depth))
            .collect::<ExchangeResult<Vec<_>>>()?;
        Ok(Self::new(venues))
    }
}

impl<V: VenueAdapter> VenueManager<V> {
    pub fn new(venues: Vec<V>) -> Self {
        Self { venues }
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    /// Load every venue's catalog concurrently.
    pub async fn load_catalogs(self) -> LoadedVenues<V> {
        let results = join_all(self.venues.iter().map(|v| v.list_symbols())).await;

        let mut venues = Vec::with_capacity(self.venues.len());
        let mut symbols = BTreeSet::new();
        let mut failed = Vec::new();

        for (venue, result) in self.venues.into_iter().zip(results) {
            match result {
                Ok(list) => {
                    info!(venue = %venue.venue_name(), markets = list.len(), "Venue ready");
                    symbols.extend(list);
                    venues.push(venue);
                }
                Err(e) => {
                    warn!(
                        venue = %venue.venue_name(),
                        error = %e,
                        "Failed to load catalog, skipping venue"
                    );
                    failed.push(venue.venue_name().to_string());
                }
            }
        }

        info!(
            venues = venues.len(),
            failed = failed.len(),
            symbols = symbols.len(),
            "Market catalogs loaded"
        );

        LoadedVenues {
            venues,
            symbols: symbols.into_iter().collect(),
            failed,
        }
    }
}
