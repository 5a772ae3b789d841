//! Console rendering of scan reports
//!
//! `SCAN_OUTPUT=json` switches the binary from the numbered list to a JSON
//! document of the whole report. Progress events are logged, not printed.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::core::types::{ScanProgress, ScanReport};
use crate::error::Result;

/// Output format for the console summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Resolve from `SCAN_OUTPUT` (default: text)
    pub fn from_env() -> Self {
        match std::env::var("SCAN_OUTPUT").map(|v| v.trim().to_lowercase()) {
            Ok(v) if v == "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

/// Numbered list of opportunities, one per line
pub fn render_text(report: &ScanReport) -> String {
    if report.opportunities.is_empty() {
        return format!(
            "No profitable triangles found ({} triangles over {} pairs, {} unpriced)\n",
            report.triangle_count, report.pair_count, report.failed
        );
    }

    let mut out = format!("Top {} opportunities:\n", report.opportunities.len());
    for (rank, opp) in report.opportunities.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} | venues: {}, {}, {} | profit: {:.4}%\n",
            rank + 1,
            opp.triangle,
            opp.venues[0],
            opp.venues[1],
            opp.venues[2],
            opp.profit_percent
        ));
    }
    out
}

pub fn render_json(report: &ScanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render(report: &ScanReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Log every `every`-th progress event (and the last) until all senders drop.
///
/// Returns the number of events received.
pub async fn log_progress(mut rx: mpsc::Receiver<ScanProgress>, every: usize) -> usize {
    let every = every.max(1);
    let mut received = 0;
    while let Some(progress) = rx.recv().await {
        received += 1;
        if progress.done % every == 0 || progress.done == progress.total {
            info!(
                scan_id = %progress.scan_id,
                done = progress.done,
                total = progress.total,
                percent = format_args!("{:.1}", progress.percent()),
                "Scan progress"
            );
        }
    }
    received
}

/// Wait for the progress logger; a panicked or cancelled task is logged, not raised
pub async fn join_progress_logger(handle: JoinHandle<usize>) -> Option<usize> {
    match handle.await {
        Ok(received) => Some(received),
        Err(e) => {
            warn!(error = %e, "Progress reporter task failed");
            None
        }
    }
}
