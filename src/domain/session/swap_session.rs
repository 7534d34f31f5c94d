//! Swap session: form inputs, derived estimate, phase transitions

use std::collections::HashMap;
use tracing::{error, info, warn};

use crate::domain::gateway::{SwapGateway, SwapRequest, VerificationRequest};
use crate::domain::pool::LiquidityPool;
use crate::domain::quote::{parse_amount, QuoteBreakdown, QuoteCalculator};
use crate::shared::config::AppConfig;
use crate::shared::errors::{SessionError, ValidationError};
use crate::shared::types::{Token, TokenCatalog};
use crate::shared::utils::{generate_id, timestamp_now};
use super::{Phase, VerificationStatus};

/// State of one swap interaction.
///
/// `estimated_output` is recomputed by every setter that touches the token
/// pair or the amount and is never written anywhere else. Dispatching
/// actions take `&mut self`, so an action cannot be re-entered while its
/// request is in flight.
#[derive(Debug, Clone)]
pub struct SwapSession {
    id: String,
    catalog: TokenCatalog,
    calculator: QuoteCalculator,
    from_token: Token,
    to_token: Token,
    amount: String,
    wallet_address: String,
    estimated_output: f64,
    phase: Phase,
    transaction_id: String,
    verification_status: VerificationStatus,
    pool: LiquidityPool,
}

impl SwapSession {
    pub fn new(
        catalog: TokenCatalog,
        calculator: QuoteCalculator,
        from_symbol: &str,
        to_symbol: &str,
    ) -> Result<Self, ValidationError> {
        let from_token = catalog.resolve(from_symbol)?.clone();
        let to_token = catalog.resolve(to_symbol)?.clone();
        Ok(Self {
            id: generate_id(),
            catalog,
            calculator,
            from_token,
            to_token,
            amount: String::new(),
            wallet_address: String::new(),
            estimated_output: 0.0,
            phase: Phase::Idle,
            transaction_id: String::new(),
            verification_status: VerificationStatus::None,
            pool: LiquidityPool::new(),
        })
    }

    pub fn from_config(cfg: &AppConfig) -> Result<Self, ValidationError> {
        Self::new(
            cfg.catalog(),
            QuoteCalculator::new(cfg.swap.fee_percent),
            &cfg.swap.default_from,
            &cfg.swap.default_to,
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn catalog(&self) -> &TokenCatalog {
        &self.catalog
    }

    pub fn calculator(&self) -> &QuoteCalculator {
        &self.calculator
    }

    pub fn from_token(&self) -> &Token {
        &self.from_token
    }

    pub fn to_token(&self) -> &Token {
        &self.to_token
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn wallet_address(&self) -> &str {
        &self.wallet_address
    }

    pub fn estimated_output(&self) -> f64 {
        self.estimated_output
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn verification_status(&self) -> VerificationStatus {
        self.verification_status
    }

    pub fn pool(&self) -> &LiquidityPool {
        &self.pool
    }

    /// Merge a completed pool fetch into the session
    pub fn load_pool(&mut self, balances: HashMap<String, f64>) {
        self.pool.load(balances);
    }

    /// Advisory minimum for the current pair
    pub fn minimum_input(&self) -> f64 {
        self.calculator.minimum_input(&self.from_token, &self.to_token)
    }

    pub fn quote_breakdown(&self) -> QuoteBreakdown {
        let amount_in = parse_amount(&self.amount).unwrap_or(0.0);
        self.calculator.breakdown(&self.from_token, &self.to_token, amount_in)
    }

    pub fn select_from(&mut self, symbol: &str) -> Result<(), SessionError> {
        self.require_phase("change tokens", Phase::Idle)?;
        self.from_token = self.catalog.resolve(symbol)?.clone();
        self.refresh_estimate();
        Ok(())
    }

    pub fn select_to(&mut self, symbol: &str) -> Result<(), SessionError> {
        self.require_phase("change tokens", Phase::Idle)?;
        self.to_token = self.catalog.resolve(symbol)?.clone();
        self.refresh_estimate();
        Ok(())
    }

    pub fn set_amount(&mut self, text: &str) -> Result<(), SessionError> {
        self.require_phase("change the amount", Phase::Idle)?;
        self.amount = text.trim().to_string();
        self.refresh_estimate();
        Ok(())
    }

    pub fn set_wallet_address(&mut self, text: &str) -> Result<(), SessionError> {
        self.require_phase("change the wallet address", Phase::Idle)?;
        self.wallet_address = text.trim().to_string();
        Ok(())
    }

    pub fn set_transaction_id(&mut self, text: &str) -> Result<(), SessionError> {
        self.require_phase("enter a transaction ID", Phase::ResultShown)?;
        self.transaction_id = text.trim().to_string();
        Ok(())
    }

    /// Dispatch the swap and, once it is sent, move to `ResultShown`.
    ///
    /// The pool is adjusted only after a successful dispatch, so a transport
    /// failure leaves both the phase and the pool untouched.
    pub async fn submit<G>(&mut self, gateway: &G) -> Result<(), SessionError>
    where
        G: SwapGateway + ?Sized,
    {
        self.require_phase("submit a swap", Phase::Idle)?;

        if self.amount.is_empty() {
            return Err(ValidationError::MissingAmount.into());
        }
        let amount = parse_amount(&self.amount)
            .ok_or_else(|| ValidationError::InvalidAmount(self.amount.clone()))?;
        if self.wallet_address.is_empty() {
            return Err(ValidationError::MissingWalletAddress.into());
        }

        let request = SwapRequest {
            token_from: self.from_token.symbol.clone(),
            token_to: self.to_token.symbol.clone(),
            amount,
            receiving_amount: self.estimated_output,
            wallet_address: self.wallet_address.clone(),
            timestamp: timestamp_now(),
        };

        info!(
            session = %self.id,
            "Dispatching swap {} {} -> {:.6} {}",
            amount, request.token_from, request.receiving_amount, request.token_to
        );

        if let Err(e) = gateway.dispatch_swap(&request).await {
            error!(session = %self.id, "Error initiating swap: {}", e);
            return Err(e.into());
        }

        self.pool.apply_swap(
            &request.token_from,
            amount,
            &request.token_to,
            request.receiving_amount,
        );
        self.phase = Phase::ResultShown;
        info!(session = %self.id, "Swap initiated, awaiting transaction ID");
        Ok(())
    }

    /// Dispatch the verification claim and record the outcome.
    ///
    /// A transport failure is recorded as `VerificationStatus::Error` rather
    /// than returned; only local validation and phase errors are `Err`.
    pub async fn verify<G>(&mut self, gateway: &G) -> Result<VerificationStatus, SessionError>
    where
        G: SwapGateway + ?Sized,
    {
        self.require_phase("verify a transaction", Phase::ResultShown)?;

        if self.transaction_id.is_empty() {
            return Err(ValidationError::MissingTransactionId.into());
        }

        let request = VerificationRequest {
            transaction_id: self.transaction_id.clone(),
            wallet_address: self.wallet_address.clone(),
            token_from: self.from_token.symbol.clone(),
            token_to: self.to_token.symbol.clone(),
            amount: self.amount.clone(),
            timestamp: timestamp_now(),
        };

        info!(session = %self.id, "Dispatching verification for {}", request.transaction_id);

        self.verification_status = match gateway.dispatch_verification(&request).await {
            Ok(()) => VerificationStatus::Success,
            Err(e) => {
                warn!(session = %self.id, "Error verifying transaction: {}", e);
                VerificationStatus::Error
            }
        };
        Ok(self.verification_status)
    }

    /// Return to the compose view with a cleared form. Token pair is kept.
    pub fn back(&mut self) -> Result<(), SessionError> {
        self.require_phase("go back", Phase::ResultShown)?;
        self.phase = Phase::Idle;
        self.verification_status = VerificationStatus::None;
        self.transaction_id.clear();
        self.amount.clear();
        self.wallet_address.clear();
        self.refresh_estimate();
        Ok(())
    }

    fn refresh_estimate(&mut self) {
        self.estimated_output = self.quote_breakdown().amount_out;
    }

    fn require_phase(&self, action: &'static str, expected: Phase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidPhase { action, phase: self.phase })
        }
    }
}
