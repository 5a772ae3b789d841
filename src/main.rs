//! Triangular arbitrage scanner entry point
//!
//! Orchestrates:
//! 1. Config + logging initialization
//! 2. Venue adapters → market catalogs
//! 3. One scan over every triangle in the currency universe
//! 4. Console summary of the top opportunities

use tokio::sync::mpsc;
use tracing::info;

use tri_arb_scanner::adapters::load_venues;
use tri_arb_scanner::config::constants::config_path;
use tri_arb_scanner::config::load_or_default;
use tri_arb_scanner::config::logging::init_logging;
use tri_arb_scanner::core::Scanner;
use tri_arb_scanner::report::{join_progress_logger, log_progress, render, OutputFormat};

/// Progress channel capacity; events beyond it are dropped, not queued
const PROGRESS_CHANNEL_CAPACITY: usize = 256;
/// Log a progress line every this many evaluated triangles
const PROGRESS_LOG_EVERY: usize = 50;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // =========================================================================
    // 1. Config + logging
    // =========================================================================
    dotenvy::dotenv().ok();
    init_logging();

    info!("=== Triangular Arbitrage Scanner ===");

    let path = config_path();
    let config = load_or_default(&path)?;
    config.log_summary();

    // =========================================================================
    // 2. Venues + market catalogs
    // =========================================================================
    let loaded = load_venues(&config.venues, config.orderbook_depth).await?;

    // =========================================================================
    // 3. Scan
    // =========================================================================
    let (progress_tx, progress_rx) = mpsc::channel(PROGRESS_CHANNEL_CAPACITY);
    let reporter = tokio::spawn(log_progress(progress_rx, PROGRESS_LOG_EVERY));

    let scanner = Scanner::new(
        loaded.venues,
        config.currency_universe(),
        config.scan_settings(),
    )
    .with_progress(progress_tx);

    let report = scanner.scan(&loaded.symbols).await;

    // Closing the last sender ends the reporter loop
    drop(scanner);
    join_progress_logger(reporter).await;

    // =========================================================================
    // 4. Console summary
    // =========================================================================
    print!("{}", render(&report, OutputFormat::from_env())?);

    info!(
        scan_id = %report.scan_id,
        elapsed_ms = report.elapsed_ms,
        "=== Scanner finished ==="
    );
    Ok(())
}
