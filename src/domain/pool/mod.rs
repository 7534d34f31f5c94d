//! Pool domain - liquidity display cache

mod liquidity_pool;

pub use liquidity_pool::LiquidityPool;

use chrono::{DateTime, Utc};

/// How far the cached pool may have drifted from the remote one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolStaleness {
    /// When the snapshot was fetched; `None` while the fetch is pending or failed
    pub loaded_at: Option<DateTime<Utc>>,
    /// Optimistic adjustments applied since the fetch
    pub local_adjustments: u32,
}

impl PoolStaleness {
    pub fn is_diverged(&self) -> bool {
        self.local_adjustments > 0
    }
}
