//! Configuration loader for YAML files
//!
//! This module handles loading and validating configuration from YAML files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::AppError;

use super::types::AppConfig;

/// Load configuration from a YAML file
///
/// This function:
/// 1. Checks if the file exists
/// 2. Parses the YAML content
/// 3. Validates the configuration rules
///
/// # Returns
/// * `Ok(AppConfig)` - Successfully loaded and validated configuration
/// * `Err(AppError)` - File not found, parse error, or validation failure
///
/// # Example
/// ```ignore
/// use std::path::Path;
/// use tri_arb_scanner::config::load_config;
///
/// let config = load_config(Path::new("config.yaml"))?;
/// ```
pub fn load_config(path: &Path) -> Result<AppConfig, AppError> {
    let config = parse_file(path)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a YAML string (useful for testing)
pub fn load_config_from_str(yaml_content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = serde_yaml::from_str(yaml_content).map_err(|e| {
        AppError::Config(format!("YAML parse error: {}", e))
    })?;

    config.validate()?;

    Ok(config)
}

/// Startup loader used by the binary
///
/// A missing file falls back to built-in defaults (with a warning); a file
/// that exists but does not parse is an error. Environment overrides are
/// applied before validation so they can fix up file values.
pub fn load_or_default(path: &Path) -> Result<AppConfig, AppError> {
    let mut config = if path.exists() {
        parse_file(path)?
    } else {
        tracing::warn!(
            path = %path.display(),
            "Configuration file not found, using built-in defaults"
        );
        AppConfig::default()
    };

    config.apply_env_overrides();
    config.validate()?;

    Ok(config)
}

fn parse_file(path: &Path) -> Result<AppConfig, AppError> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    serde_yaml::from_reader(reader).map_err(|e| {
        AppError::Config(format!(
            "YAML parse error in '{}': {}",
            path.display(),
            e
        ))
    })
}

// ============================================================================
// Tests
// ============================================================================
