//! Quote domain - swap estimates and advisory minimums

mod quote_calculator;

pub use quote_calculator::QuoteCalculator;

use serde::Serialize;

/// One priced swap, with the fee broken out
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuoteBreakdown {
    pub amount_in: f64,
    pub ratio: f64,
    pub gross: f64,
    pub fee: f64,
    pub amount_out: f64,
}

/// Parse user-entered amount text.
///
/// Returns `None` for empty, non-numeric, negative or non-finite input,
/// which callers treat as "no quote yet".
pub fn parse_amount(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}
