//! Supply-ratio quote calculator

use crate::shared::types::Token;
use super::QuoteBreakdown;

/// Prices every pair by the ratio of total supplies, net of a flat fee.
///
/// The rate is static and independent of the amount: this is not a
/// liquidity-depth model, and the pool cache plays no part in pricing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteCalculator {
    fee_percent: f64,
}

impl QuoteCalculator {
    pub fn new(fee_percent: f64) -> Self {
        Self { fee_percent }
    }

    pub fn fee_percent(&self) -> f64 {
        self.fee_percent
    }

    /// Exchange rate `to.total_supply / from.total_supply`
    pub fn ratio(&self, from: &Token, to: &Token) -> f64 {
        to.total_supply as f64 / from.total_supply as f64
    }

    /// Estimated output for `amount_in`, after fee.
    /// Anything other than a finite non-negative input quotes as 0.
    pub fn quote(&self, from: &Token, to: &Token, amount_in: f64) -> f64 {
        self.breakdown(from, to, amount_in).amount_out
    }

    pub fn breakdown(&self, from: &Token, to: &Token, amount_in: f64) -> QuoteBreakdown {
        let ratio = self.ratio(from, to);
        if !amount_in.is_finite() || amount_in < 0.0 || from.total_supply == 0 {
            return QuoteBreakdown { amount_in: 0.0, ratio, gross: 0.0, fee: 0.0, amount_out: 0.0 };
        }

        let gross = amount_in * ratio;
        let fee = gross * (self.fee_percent / 100.0);
        QuoteBreakdown {
            amount_in,
            ratio,
            gross,
            fee,
            amount_out: gross - fee,
        }
    }

    /// Input whose gross output is one unit of `to`, scaled up to cover the fee.
    /// Advisory only; submissions below it are not rejected.
    pub fn minimum_input(&self, from: &Token, to: &Token) -> f64 {
        (1.0 / self.ratio(from, to)) * (100.0 / (100.0 - self.fee_percent))
    }
}
