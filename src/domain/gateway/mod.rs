//! Gateway domain - the remote action endpoint as seen by the session

use async_trait::async_trait;
use std::collections::HashMap;

use crate::shared::errors::GatewayError;

/// Swap the user has committed to
#[derive(Debug, Clone, PartialEq)]
pub struct SwapRequest {
    pub token_from: String,
    pub token_to: String,
    pub amount: f64,
    pub receiving_amount: f64,
    pub wallet_address: String,
    pub timestamp: String,
}

/// Proof-of-payment claim for a dispatched swap
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationRequest {
    pub transaction_id: String,
    pub wallet_address: String,
    pub token_from: String,
    pub token_to: String,
    /// Amount exactly as the user typed it
    pub amount: String,
    pub timestamp: String,
}

/// Remote action-dispatch endpoint.
///
/// Dispatch is fire-and-forget: `Ok(())` only means the request left this
/// process. Whether the remote side accepted it is unknown.
#[async_trait]
pub trait SwapGateway: Send + Sync {
    /// One-shot fetch of pool balances keyed by token symbol
    async fn fetch_liquidity_pool(&self) -> Result<HashMap<String, f64>, GatewayError>;

    async fn dispatch_swap(&self, request: &SwapRequest) -> Result<(), GatewayError>;

    async fn dispatch_verification(&self, request: &VerificationRequest) -> Result<(), GatewayError>;
}
