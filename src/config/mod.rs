//! Configuration module for scanner settings and YAML loading
//!
//! This module provides:
//! - Configuration type (`AppConfig`) with validation and env overrides
//! - YAML loading functionality (`load_config`)
//! - Defaults and environment variable names (`constants`)
//! - Logging initialisation (`logging`)

pub mod constants;
mod loader;
pub mod logging;
mod types;

// Re-export types
pub use types::AppConfig;

// Re-export loader functions
pub use loader::{load_config, load_config_from_str, load_or_default};
