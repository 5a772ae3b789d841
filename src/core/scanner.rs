//! Scan orchestration
//!
//! One scan: filter pairs → enumerate triangles → evaluate every triangle on
//! a bounded worker pool → keep profitable results, best first, top K.
//!
//! The pool is a `Semaphore` plus a `JoinSet`. A permit is acquired before a
//! task is spawned, so at most `workers` evaluations are in flight and the
//! submission loop waits when the pool is saturated. A panicking evaluation
//! is counted as failed and excluded; it never aborts the scan.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::adapters::traits::VenueAdapter;
use crate::config::constants::{DEFAULT_FETCH_TIMEOUT_MS, DEFAULT_TOP_K, DEFAULT_WORKERS};
use crate::core::cycles::{DedupPolicy, PairGraph};
use crate::core::evaluator::evaluate_triangle;
use crate::core::pairs::filter_pairs;
use crate::core::quotes::QuoteFetcher;
use crate::core::types::{Evaluation, Opportunity, ScanProgress, ScanReport};

/// Engine knobs, usually derived from `AppConfig::scan_settings`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanSettings {
    pub workers: usize,
    pub top_k: usize,
    pub fetch_timeout: Duration,
    pub dedup: DedupPolicy,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            top_k: DEFAULT_TOP_K,
            fetch_timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
            dedup: DedupPolicy::default(),
        }
    }
}

/// Runs scans over a fixed venue list and currency universe
pub struct Scanner<V> {
    fetcher: QuoteFetcher<V>,
    universe: BTreeSet<String>,
    settings: ScanSettings,
    progress_tx: Option<mpsc::Sender<ScanProgress>>,
}

impl<V: VenueAdapter + 'static> Scanner<V> {
    /// `venues` - venue adapters in fallback priority order
    /// `universe` - currency universe, matched exactly against listed tickers
    pub fn new(venues: Vec<V>, universe: BTreeSet<String>, settings: ScanSettings) -> Self {
        Self {
            fetcher: QuoteFetcher::new(venues, settings.fetch_timeout),
            universe,
            settings,
            progress_tx: None,
        }
    }

    /// Report progress on `tx` after each evaluated triangle
    ///
    /// Events are sent with `try_send`: a full channel drops the event rather
    /// than stalling the workers.
    pub fn with_progress(mut self, tx: mpsc::Sender<ScanProgress>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    /// Run one full scan over `symbols` (normalised `BASE/QUOTE` strings)
    pub async fn scan(&self, symbols: &[String]) -> ScanReport {
        let scan_id = Uuid::new_v4();
        let started_at = Utc::now();
        let clock = Instant::now();

        let pairs = filter_pairs(symbols, &self.universe);
        let graph = PairGraph::from_pairs(&pairs);
        let triangles = graph.triangles(self.settings.dedup);
        let total = triangles.len();

        info!(
            scan_id = %scan_id,
            symbols = symbols.len(),
            pairs = pairs.len(),
            currencies = graph.currency_count(),
            edges = graph.edge_count(),
            triangles = total,
            workers = self.settings.workers,
            venues = self.fetcher.venue_count(),
            "Scan started"
        );

        let semaphore = Arc::new(Semaphore::new(self.settings.workers.max(1)));
        let done = Arc::new(AtomicUsize::new(0));
        let mut tasks: JoinSet<(usize, Evaluation)> = JoinSet::new();

        for (index, triangle) in triangles.into_iter().enumerate() {
            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => {
                    warn!(scan_id = %scan_id, error = %e, "Worker pool closed, stopping submission");
                    break;
                }
            };

            let fetcher = self.fetcher.clone();
            let done = Arc::clone(&done);
            let progress_tx = self.progress_tx.clone();

            tasks.spawn(async move {
                let evaluation = evaluate_triangle(&fetcher, triangle).await;
                drop(permit);

                let finished = done.fetch_add(1, Ordering::SeqCst) + 1;
                if let Some(tx) = progress_tx {
                    let _ = tx.try_send(ScanProgress {
                        scan_id,
                        done: finished,
                        total,
                    });
                }
                (index, evaluation)
            });
        }

        let mut evaluations: Vec<(usize, Evaluation)> = Vec::with_capacity(total);
        let mut evaluated = 0;
        let mut failed = 0;

        while let Some(joined) = tasks.join_next().await {
            evaluated += 1;
            match joined {
                Ok((index, evaluation)) => {
                    if evaluation.is_failed() {
                        failed += 1;
                    }
                    evaluations.push((index, evaluation));
                }
                Err(e) => {
                    failed += 1;
                    debug!(scan_id = %scan_id, error = %e, "Evaluation task failed");
                }
            }
        }

        let opportunities = rank_opportunities(evaluations, self.settings.top_k);
        let elapsed_ms = clock.elapsed().as_millis() as u64;

        info!(
            scan_id = %scan_id,
            evaluated,
            failed,
            opportunities = opportunities.len(),
            best_profit_percent = opportunities.first().map(|o| o.profit_percent),
            elapsed_ms,
            "Scan complete"
        );

        ScanReport {
            scan_id,
            started_at,
            elapsed_ms,
            pair_count: pairs.len(),
            triangle_count: total,
            evaluated,
            failed,
            opportunities,
        }
    }
}

/// Keep strictly profitable evaluations, best first, at most `top_k`
///
/// Ties keep triangle enumeration order, so results do not depend on task
/// completion order.
pub fn rank_opportunities(
    mut evaluations: Vec<(usize, Evaluation)>,
    top_k: usize,
) -> Vec<Opportunity> {
    evaluations.sort_by(|(ia, a), (ib, b)| {
        b.profit_percent
            .total_cmp(&a.profit_percent)
            .then(ia.cmp(ib))
    });

    evaluations
        .into_iter()
        .filter_map(|(_, evaluation)| evaluation.into_opportunity())
        .take(top_k)
        .collect()
}
