//! Configuration types for scanner settings
//!
//! This module defines the configuration struct loaded from YAML, its
//! validation rules and the environment-variable overrides applied on top.

use std::collections::BTreeSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::adapters::factory::SUPPORTED_VENUES;
use crate::config::constants::{
    env_parse, DEFAULT_CURRENCIES, DEFAULT_FETCH_TIMEOUT_MS, DEFAULT_TOP_K, DEFAULT_VENUES,
    DEFAULT_WORKERS, ENV_FETCH_TIMEOUT_MS, ENV_TOP_K, ENV_VENUES, ENV_WORKERS, MAX_WORKERS,
};
use crate::adapters::types::DEFAULT_ORDERBOOK_DEPTH;
use crate::core::cycles::DedupPolicy;
use crate::core::scanner::ScanSettings;
use crate::error::AppError;

/// Largest book depth any supported venue serves in one snapshot request
const MAX_ORDERBOOK_DEPTH: usize = 100;

// ============================================================================
// Root Configuration
// ============================================================================

/// Root application configuration
///
/// Every key is optional in YAML; missing keys take the defaults from
/// [`crate::config::constants`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Currency universe; pairs outside it are ignored
    pub currencies: Vec<String>,
    /// Venue ids in fallback priority order
    pub venues: Vec<String>,
    /// Worker pool size for triangle evaluation
    pub workers: usize,
    /// Number of opportunities surfaced per scan
    pub top_k: usize,
    /// Upper bound on a single order book fetch
    pub fetch_timeout_ms: u64,
    /// Triangle de-duplication policy
    pub dedup: DedupPolicy,
    /// Order book levels requested per side
    pub orderbook_depth: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currencies: DEFAULT_CURRENCIES.iter().map(|c| c.to_string()).collect(),
            venues: DEFAULT_VENUES.iter().map(|v| v.to_string()).collect(),
            workers: DEFAULT_WORKERS,
            top_k: DEFAULT_TOP_K,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            dedup: DedupPolicy::default(),
            orderbook_depth: DEFAULT_ORDERBOOK_DEPTH,
        }
    }
}

impl AppConfig {
    /// Validate all configuration rules
    pub fn validate(&self) -> Result<(), AppError> {
        // Rule: a triangle needs at least three distinct currencies
        let universe = self.currency_universe();
        if universe.len() < 3 {
            return Err(AppError::Config(format!(
                "Currency universe must contain at least 3 distinct currencies, got {}",
                universe.len()
            )));
        }

        for currency in &self.currencies {
            let trimmed = currency.trim();
            if trimmed.is_empty() || trimmed.contains('/') {
                return Err(AppError::Config(format!(
                    "Invalid currency '{}': must be a non-empty ticker without '/'",
                    currency
                )));
            }
        }

        // Rule: at least one known venue, no duplicates
        if self.venues.is_empty() {
            return Err(AppError::Config(
                "Configuration must contain at least one venue".to_string()
            ));
        }

        let mut seen = BTreeSet::new();
        for venue in &self.venues {
            let id = canonical_venue(venue);
            if !SUPPORTED_VENUES.contains(&id.as_str()) {
                return Err(AppError::Config(format!(
                    "Unknown venue '{}': supported venues are {}",
                    venue,
                    SUPPORTED_VENUES.join(", ")
                )));
            }
            if !seen.insert(id) {
                return Err(AppError::Config(format!("Venue '{}' listed twice", venue)));
            }
        }

        if self.workers == 0 || self.workers > MAX_WORKERS {
            return Err(AppError::Config(format!(
                "workers ({}) must be between 1 and {}",
                self.workers, MAX_WORKERS
            )));
        }

        if self.top_k == 0 {
            return Err(AppError::Config("top_k must be > 0".to_string()));
        }

        if self.fetch_timeout_ms == 0 {
            return Err(AppError::Config("fetch_timeout_ms must be > 0".to_string()));
        }

        if self.orderbook_depth == 0 || self.orderbook_depth > MAX_ORDERBOOK_DEPTH {
            return Err(AppError::Config(format!(
                "orderbook_depth ({}) must be between 1 and {}",
                self.orderbook_depth, MAX_ORDERBOOK_DEPTH
            )));
        }

        Ok(())
    }

    /// Apply `SCAN_*` environment overrides on top of file values
    ///
    /// Unset or unparsable variables leave the current value untouched.
    pub fn apply_env_overrides(&mut self) {
        if let Some(workers) = env_parse::<usize>(ENV_WORKERS) {
            self.workers = workers;
        }
        if let Some(top_k) = env_parse::<usize>(ENV_TOP_K) {
            self.top_k = top_k;
        }
        if let Some(timeout) = env_parse::<u64>(ENV_FETCH_TIMEOUT_MS) {
            self.fetch_timeout_ms = timeout;
        }
        if let Ok(raw) = std::env::var(ENV_VENUES) {
            let venues: Vec<String> = raw
                .split(',')
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty())
                .collect();
            if !venues.is_empty() {
                self.venues = venues;
            }
        }
    }

    /// Currency universe with surrounding whitespace removed. Case is kept.
    pub fn currency_universe(&self) -> BTreeSet<String> {
        self.currencies
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect()
    }

    /// Engine settings derived from this configuration
    pub fn scan_settings(&self) -> ScanSettings {
        ScanSettings {
            workers: self.workers,
            top_k: self.top_k,
            fetch_timeout: Duration::from_millis(self.fetch_timeout_ms),
            dedup: self.dedup,
        }
    }

    /// Log the effective configuration at startup
    pub fn log_summary(&self) {
        tracing::info!(
            currencies = self.currency_universe().len(),
            venues = ?self.venues,
            workers = self.workers,
            top_k = self.top_k,
            fetch_timeout_ms = self.fetch_timeout_ms,
            dedup = ?self.dedup,
            orderbook_depth = self.orderbook_depth,
            "Configuration loaded"
        );
    }
}

fn canonical_venue(name: &str) -> String {
    match name.trim().to_lowercase().as_str() {
        "gate" => "gateio".to_string(),
        other => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
