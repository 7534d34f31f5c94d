//! Client-side liquidity pool cache

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::debug;

use super::PoolStaleness;

/// Last fetched pool balances plus any local optimistic adjustments.
///
/// Advisory only. Loaded once per session and never re-synced, so after the
/// first local swap it no longer reflects what the remote side holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiquidityPool {
    balances: HashMap<String, f64>,
    loaded_at: Option<DateTime<Utc>>,
    local_adjustments: u32,
}

impl LiquidityPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole snapshot with a freshly fetched one.
    pub fn load(&mut self, balances: HashMap<String, f64>) {
        debug!("Loading liquidity snapshot with {} entries", balances.len());
        self.balances = balances;
        self.loaded_at = Some(Utc::now());
        self.local_adjustments = 0;
    }

    /// Balance for `symbol`; unknown symbols read as 0.
    pub fn balance(&self, symbol: &str) -> f64 {
        self.balances.get(symbol).copied().unwrap_or(0.0)
    }

    /// Optimistic update after a dispatched swap: the source side grows by
    /// what the user sends, the destination shrinks by the estimate.
    pub fn apply_swap(&mut self, from: &str, amount_in: f64, to: &str, amount_out: f64) {
        *self.balances.entry(from.to_string()).or_insert(0.0) += amount_in;
        *self.balances.entry(to.to_string()).or_insert(0.0) -= amount_out;
        self.local_adjustments += 1;
        debug!(
            "Optimistic pool update: {} +{}, {} -{}",
            from, amount_in, to, amount_out
        );
    }

    pub fn balances(&self) -> &HashMap<String, f64> {
        &self.balances
    }

    pub fn staleness(&self) -> PoolStaleness {
        PoolStaleness {
            loaded_at: self.loaded_at,
            local_adjustments: self.local_adjustments,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> HashMap<String, f64> {
        HashMap::from([
            ("RXD".to_string(), 5_000_000.0),
            ("RADCAT".to_string(), 1_000_000.0),
        ])
    }

    #[test]
    fn test_empty_pool_reads_zero() {
        let pool = LiquidityPool::new();
        assert_eq!(pool.balance("RXD"), 0.0);
        assert!(!pool.is_loaded());
        assert_eq!(pool.staleness().local_adjustments, 0);
    }

    #[test]
    fn test_apply_swap_adjusts_both_sides() {
        let mut pool = LiquidityPool::new();
        pool.load(snapshot());
        pool.apply_swap("RXD", 1_000_000.0, "RADCAT", 169_750.0);

        assert_eq!(pool.balance("RXD"), 6_000_000.0);
        assert_eq!(pool.balance("RADCAT"), 830_250.0);
        assert_eq!(pool.staleness().local_adjustments, 1);
    }

    #[test]
    fn test_apply_swap_on_missing_symbols_starts_from_zero() {
        let mut pool = LiquidityPool::new();
        pool.apply_swap("FUGAZI", 10.0, "PILIM", 4.5);
        assert_eq!(pool.balance("FUGAZI"), 10.0);
        assert_eq!(pool.balance("PILIM"), -4.5);
    }

    #[test]
    fn test_load_replaces_snapshot_and_resets_adjustments() {
        let mut pool = LiquidityPool::new();
        pool.apply_swap("PILIM", 1.0, "RXD", 1.0);
        pool.load(snapshot());

        assert_eq!(pool.balance("PILIM"), 0.0);
        assert_eq!(pool.balance("RXD"), 5_000_000.0);
        let staleness = pool.staleness();
        assert!(staleness.loaded_at.is_some());
        assert_eq!(staleness.local_adjustments, 0);
        assert!(!staleness.is_diverged());
    }
}
