//! Core module - pair filtering, cycle finding, quote fetching, evaluation
//! and scan orchestration
//!
//! # Module Architecture
//!
//! This module uses **explicit re-exports** instead of glob exports so the
//! engine's public surface stays visible in one place.
//!
//! ## Usage
//! ```ignore
//! use crate::core::{Scanner, ScanSettings, ScanReport};
//! ```

pub mod cycles;
pub mod evaluator;
pub mod pairs;
pub mod quotes;
pub mod scanner;
pub mod types;

pub use cycles::{find_triangles, DedupPolicy, PairGraph, Triangle};
pub use evaluator::{compute_profit, evaluate_triangle};
pub use pairs::{filter_pairs, MarketPair, PairError};
pub use quotes::{FetchState, Quote, QuoteFetcher};
pub use scanner::{rank_opportunities, ScanSettings, Scanner};
pub use types::{Evaluation, Opportunity, ScanProgress, ScanReport};
