use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::domain::gateway::{SwapGateway, SwapRequest, VerificationRequest};
use crate::shared::config::EndpointCfg;
use crate::shared::errors::GatewayError;
use super::payloads::{SwapPayload, VerifyPayload, ACTION_GET_LIQUIDITY_POOL};

/// Client for the Apps Script action endpoint.
///
/// POSTs are sent fire-and-forget: the response status and body are dropped
/// unread, so a remote rejection looks exactly like an acceptance. Only
/// transport failures (connect, timeout) surface as errors. No retries.
pub struct AppsScriptClient {
    http_client: Client,
    endpoint: Url,
}

impl AppsScriptClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| GatewayError::Network(format!("invalid endpoint {}: {}", endpoint, e)))?;
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GatewayError::from)?;
        Ok(Self { http_client, endpoint })
    }

    pub fn from_config(cfg: &EndpointCfg) -> Result<Self, GatewayError> {
        Self::new(&cfg.url, cfg.timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn post_opaque<T: serde::Serialize + ?Sized>(&self, payload: &T) -> Result<(), GatewayError> {
        self.http_client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;
        Ok(())
    }
}

/// Pool balances from the endpoint's JSON object. Numbers and numeric
/// strings are accepted; anything else is skipped.
pub fn parse_liquidity_pool(value: Value) -> Result<HashMap<String, f64>, GatewayError> {
    let Value::Object(entries) = value else {
        return Err(GatewayError::InvalidResponse(
            "liquidity pool is not a JSON object".to_string(),
        ));
    };

    let mut balances = HashMap::with_capacity(entries.len());
    for (symbol, raw) in entries {
        let balance = match &raw {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match balance {
            Some(b) if b.is_finite() => {
                balances.insert(symbol, b);
            }
            _ => warn!("Skipping non-numeric pool balance for {}: {}", symbol, raw),
        }
    }
    Ok(balances)
}

#[async_trait]
impl SwapGateway for AppsScriptClient {
    async fn fetch_liquidity_pool(&self) -> Result<HashMap<String, f64>, GatewayError> {
        debug!("Fetching liquidity pool from {}", self.endpoint);

        let response = self
            .http_client
            .get(self.endpoint.clone())
            .query(&[("action", ACTION_GET_LIQUIDITY_POOL)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::InvalidResponse(format!(
                "liquidity pool request failed with status: {}",
                response.status()
            )));
        }

        let body: Value = response.json().await?;
        let balances = parse_liquidity_pool(body)?;
        info!("Fetched liquidity pool with {} tokens", balances.len());
        Ok(balances)
    }

    async fn dispatch_swap(&self, request: &SwapRequest) -> Result<(), GatewayError> {
        self.post_opaque(&SwapPayload::from(request)).await
    }

    async fn dispatch_verification(&self, request: &VerificationRequest) -> Result<(), GatewayError> {
        self.post_opaque(&VerifyPayload::from(request)).await
    }
}
