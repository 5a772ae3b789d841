//! Application-wide constants and configuration defaults
//!
//! Defaults for every config key live here, next to the environment
//! variables that can override them at startup.

use std::path::PathBuf;

// =============================================================================
// Currency Universe & Venues
// =============================================================================

/// Default currency universe: large-cap, liquid spot tickers
pub const DEFAULT_CURRENCIES: &[&str] = &[
    "BTC", "ETH", "USDT", "BNB", "SOL", "ADA", "DOGE", "XRP", "LTC", "DOT",
    "SHIB", "AVAX", "MATIC", "ATOM", "UNI", "LINK", "NEAR", "XMR", "BCH", "TRX",
    "ALGO", "AAVE", "FTM", "ICP", "FIL", "VET", "EOS", "SAND", "MANA", "XTZ",
    "THETA", "EGLD", "GRT", "CAKE", "AXS", "STX", "CRV", "KLAY", "GALA", "LDO",
    "QNT", "RUNE", "CHZ", "ENJ", "FLOW", "DYDX", "1INCH", "KAVA", "GMT", "SNX",
    "HNT", "IMX", "ZEC", "MINA", "COMP", "ANKR", "RSR", "FTT", "HOT", "RVN",
    "HBAR", "ZIL", "NEXO", "CELR", "WAVES", "BAT", "TWT", "DASH", "LRC", "ROSE",
    "CELO", "ENS", "IOST", "AR", "MASK", "XEC", "CSPR", "OMG", "TFUEL", "GNO",
    "REEF", "KSM", "GLMR", "CTSI", "ZEN", "OCEAN", "SC", "COTI", "IOTA", "WOO",
    "KEEP", "PERP", "JASMY", "SXP", "FLUX", "SPELL", "UMA", "YFI", "BAL",
];

/// Default venue priority order
pub const DEFAULT_VENUES: &[&str] = &["binance", "kucoin", "gateio"];

// =============================================================================
// Scan Defaults
// =============================================================================

pub const DEFAULT_WORKERS: usize = 10;
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

/// Upper bound on the worker pool; venues rate-limit well below this
pub const MAX_WORKERS: usize = 256;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_CONFIG_PATH: &str = "SCANNER_CONFIG";
pub const ENV_WORKERS: &str = "SCAN_WORKERS";
pub const ENV_TOP_K: &str = "SCAN_TOP_K";
pub const ENV_VENUES: &str = "SCAN_VENUES";
pub const ENV_FETCH_TIMEOUT_MS: &str = "SCAN_FETCH_TIMEOUT_MS";

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Path of the YAML config file (default: `config.yaml`)
///
/// Environment variable: `SCANNER_CONFIG`
pub fn config_path() -> PathBuf {
    std::env::var(ENV_CONFIG_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Parse an environment variable, ignoring it when unset or unparsable
pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashSet;

    #[test]
    fn test_default_currencies_are_unique_and_upper_case() {
        let unique: HashSet<&str> = DEFAULT_CURRENCIES.iter().copied().collect();
        assert_eq!(unique.len(), DEFAULT_CURRENCIES.len());
        assert!(DEFAULT_CURRENCIES.iter().all(|c| c.to_uppercase() == *c));
        assert!(unique.contains("BTC") && unique.contains("USDT"));
    }

    #[test]
    #[serial(env)]
    fn test_config_path_default_and_override() {
        std::env::remove_var(ENV_CONFIG_PATH);
        assert_eq!(config_path(), PathBuf::from("config.yaml"));

        std::env::set_var(ENV_CONFIG_PATH, "/etc/scanner.yaml");
        assert_eq!(config_path(), PathBuf::from("/etc/scanner.yaml"));
        std::env::remove_var(ENV_CONFIG_PATH);
    }

    #[test]
    #[serial(env)]
    fn test_env_parse_ignores_garbage() {
        std::env::set_var("SCAN_TEST_VALUE", "not-a-number");
        assert_eq!(env_parse::<usize>("SCAN_TEST_VALUE"), None);

        std::env::set_var("SCAN_TEST_VALUE", " 42 ");
        assert_eq!(env_parse::<usize>("SCAN_TEST_VALUE"), Some(42));
        std::env::remove_var("SCAN_TEST_VALUE");
    }
}
