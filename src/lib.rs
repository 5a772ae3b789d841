//! Triangular arbitrage scanner library
//!
//! Discovers three-currency conversion cycles across spot venues and ranks
//! them by the return of a unit amount at best bid/ask.

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod report;

pub use error::AppError;
