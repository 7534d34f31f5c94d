//! Application services and use cases

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::{error, info};

use crate::domain::gateway::SwapGateway;
use crate::domain::session::SwapSession;
use crate::infrastructure::gateway::AppsScriptClient;
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, GatewayError};

type PoolFetchResult = Result<HashMap<String, f64>, GatewayError>;

/// Wires configuration and the gateway into sessions
pub struct SwapService {
    config: AppConfig,
    gateway: Arc<dyn SwapGateway>,
}

impl SwapService {
    pub fn new(config: AppConfig, gateway: Arc<dyn SwapGateway>) -> Self {
        Self { config, gateway }
    }

    /// Service backed by the configured HTTP endpoint
    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let client = AppsScriptClient::from_config(&config.endpoint)?;
        info!("Using action endpoint {}", client.endpoint());
        Ok(Self::new(config, Arc::new(client)))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn gateway(&self) -> &dyn SwapGateway {
        self.gateway.as_ref()
    }

    pub fn new_session(&self) -> Result<SwapSession, AppError> {
        let session = SwapSession::from_config(&self.config)?;
        info!(session = %session.id(), "New swap session");
        Ok(session)
    }

    /// Start the one-shot pool fetch in the background.
    /// The caller renders a zero-valued pool until the result is merged.
    pub fn spawn_pool_fetch(&self) -> PendingPool {
        let (tx, rx) = oneshot::channel();
        let gateway = Arc::clone(&self.gateway);
        tokio::spawn(async move {
            let result = gateway.fetch_liquidity_pool().await;
            let _ = tx.send(result);
        });
        PendingPool { rx: Some(rx) }
    }
}

/// An in-flight pool fetch, merged into a session at most once
pub struct PendingPool {
    rx: Option<oneshot::Receiver<PoolFetchResult>>,
}

impl PendingPool {
    /// Merge the fetch result if it has arrived. Returns true when a snapshot was loaded.
    pub fn poll_into(&mut self, session: &mut SwapSession) -> bool {
        let Some(rx) = self.rx.as_mut() else {
            return false;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.rx = None;
                Self::merge(result, session)
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Closed) => {
                self.rx = None;
                false
            }
        }
    }

    /// Wait for the fetch to finish and merge it
    pub async fn wait_into(&mut self, session: &mut SwapSession) -> bool {
        let Some(rx) = self.rx.take() else {
            return false;
        };
        match rx.await {
            Ok(result) => Self::merge(result, session),
            Err(_) => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }

    fn merge(result: PoolFetchResult, session: &mut SwapSession) -> bool {
        match result {
            Ok(balances) => {
                session.load_pool(balances);
                true
            }
            Err(e) => {
                error!("Error fetching liquidity pool: {}", e);
                false
            }
        }
    }
}
