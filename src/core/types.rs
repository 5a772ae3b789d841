//! Scan result types shared by the evaluator, the scanner and the binary.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::cycles::Triangle;

// =============================================================================
// Evaluation (one per triangle)
// =============================================================================

/// Outcome of pricing one triangle
///
/// `profit_percent` is `-inf` when any leg had no usable price or the
/// arithmetic produced a non-finite value.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub triangle: Triangle,
    /// Venue that served each leg, `None` when the leg was exhausted
    pub venues: [Option<Arc<str>>; 3],
    pub profit_percent: f64,
}

impl Evaluation {
    /// An evaluation that could not be priced
    pub fn failed(triangle: Triangle, venues: [Option<Arc<str>>; 3]) -> Self {
        Self {
            triangle,
            venues,
            profit_percent: f64::NEG_INFINITY,
        }
    }

    pub fn is_failed(&self) -> bool {
        !self.profit_percent.is_finite()
    }

    /// Promote to an opportunity when strictly profitable
    pub fn into_opportunity(self) -> Option<Opportunity> {
        if !(self.profit_percent.is_finite() && self.profit_percent > 0.0) {
            return None;
        }
        let [v1, v2, v3] = self.venues;
        Some(Opportunity {
            triangle: self.triangle,
            venues: [v1?, v2?, v3?],
            profit_percent: self.profit_percent,
        })
    }
}

// =============================================================================
// Opportunity (terminal output)
// =============================================================================

/// A profitable triangle, as reported to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub triangle: Triangle,
    pub venues: [Arc<str>; 3],
    pub profit_percent: f64,
}

// =============================================================================
// Scan Report & Progress
// =============================================================================

/// Summary of one complete scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub scan_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    /// Pairs left after universe filtering
    pub pair_count: usize,
    pub triangle_count: usize,
    /// Triangles whose evaluation completed (priced or not)
    pub evaluated: usize,
    /// Evaluations that ended at `-inf`, including panicked tasks
    pub failed: usize,
    /// Best opportunities, profit descending, at most `top_k`
    pub opportunities: Vec<Opportunity>,
}

/// Progress event emitted after each evaluated triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanProgress {
    pub scan_id: Uuid,
    pub done: usize,
    pub total: usize,
}

impl ScanProgress {
    #[inline]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.done as f64 * 100.0 / self.total as f64
    }
}
