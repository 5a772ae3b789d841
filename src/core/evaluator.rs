//! Triangle profitability evaluation
//!
//! Starting from one unit of the first currency, each leg converts the
//! running amount using its quote:
//!
//! | leg | bid present | bid absent  |
//! |-----|-------------|-------------|
//! | 1   | `× bid`     | `÷ ask`     |
//! | 2   | `× bid`     | `× ask`     |
//! | 3   | `× bid`     | `÷ ask`     |
//!
//! Leg 2 multiplies by the ask where legs 1 and 3 divide. Published
//! results depend on this asymmetry; do not "fix" it in isolation.

use std::sync::Arc;

use tracing::debug;

use crate::adapters::traits::VenueAdapter;
use crate::core::cycles::Triangle;
use crate::core::quotes::{Quote, QuoteFetcher};
use crate::core::types::Evaluation;

/// How a leg applies its ask when no bid is available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AskFallback {
    Divide,
    Multiply,
}

const LEG_ASK_FALLBACK: [AskFallback; 3] = [
    AskFallback::Divide,
    AskFallback::Multiply,
    AskFallback::Divide,
];

/// Convert `amount` through one leg; `None` when the quote has no price
fn apply_leg(amount: f64, quote: &Quote, fallback: AskFallback) -> Option<f64> {
    match (quote.bid, quote.ask) {
        (Some(bid), _) => Some(amount * bid),
        (None, Some(ask)) => Some(match fallback {
            AskFallback::Divide => amount / ask,
            AskFallback::Multiply => amount * ask,
        }),
        (None, None) => None,
    }
}

/// Percentage return of a unit amount through the three legs
///
/// Any missing leg or non-finite result gives `-inf`.
pub fn compute_profit(quotes: &[Option<Quote>; 3]) -> f64 {
    let mut amount = 1.0_f64;
    for (quote, fallback) in quotes.iter().zip(LEG_ASK_FALLBACK) {
        let Some(next) = quote.as_ref().and_then(|q| apply_leg(amount, q, fallback)) else {
            return f64::NEG_INFINITY;
        };
        amount = next;
    }

    let profit = (amount - 1.0) * 100.0;
    if profit.is_finite() {
        profit
    } else {
        f64::NEG_INFINITY
    }
}

/// Fetch the three leg quotes concurrently and price the triangle
pub async fn evaluate_triangle<V: VenueAdapter>(
    fetcher: &QuoteFetcher<V>,
    triangle: Triangle,
) -> Evaluation {
    let [leg1, leg2, leg3] = &triangle.legs;
    let (q1, q2, q3) = tokio::join!(fetcher.fetch(leg1), fetcher.fetch(leg2), fetcher.fetch(leg3));
    let quotes = [q1, q2, q3];

    let venues: [Option<Arc<str>>; 3] =
        [0, 1, 2].map(|i| quotes[i].as_ref().map(|q| Arc::clone(&q.venue)));
    let profit_percent = compute_profit(&quotes);

    if profit_percent.is_finite() {
        debug!(triangle = %triangle, profit_percent, "Triangle priced");
    } else {
        debug!(triangle = %triangle, "Triangle has an unusable leg");
    }

    Evaluation {
        triangle,
        venues,
        profit_percent,
    }
}
