//! Wire payloads for the action endpoint

use serde::Serialize;

use crate::domain::gateway::{SwapRequest, VerificationRequest};

pub const ACTION_GET_LIQUIDITY_POOL: &str = "getLiquidityPool";
pub const ACTION_SWAP: &str = "swap";
pub const ACTION_VERIFY: &str = "verify";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapPayload<'a> {
    pub action: &'static str,
    pub token_from: &'a str,
    pub token_to: &'a str,
    pub amount: f64,
    pub receiving_amount: f64,
    pub wallet_address: &'a str,
    pub timestamp: &'a str,
}

impl<'a> From<&'a SwapRequest> for SwapPayload<'a> {
    fn from(req: &'a SwapRequest) -> Self {
        Self {
            action: ACTION_SWAP,
            token_from: &req.token_from,
            token_to: &req.token_to,
            amount: req.amount,
            receiving_amount: req.receiving_amount,
            wallet_address: &req.wallet_address,
            timestamp: &req.timestamp,
        }
    }
}

/// `amount` travels as the text the user typed, not as a number.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPayload<'a> {
    pub action: &'static str,
    pub transaction_id: &'a str,
    pub wallet_address: &'a str,
    pub token_from: &'a str,
    pub token_to: &'a str,
    pub amount: &'a str,
    pub timestamp: &'a str,
}

impl<'a> From<&'a VerificationRequest> for VerifyPayload<'a> {
    fn from(req: &'a VerificationRequest) -> Self {
        Self {
            action: ACTION_VERIFY,
            transaction_id: &req.transaction_id,
            wallet_address: &req.wallet_address,
            token_from: &req.token_from,
            token_to: &req.token_to,
            amount: &req.amount,
            timestamp: &req.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_swap_payload_shape() {
        let req = SwapRequest {
            token_from: "RXD".to_string(),
            token_to: "RADCAT".to_string(),
            amount: 1_000_000.0,
            receiving_amount: 169_750.0,
            wallet_address: "1PhotonicWallet".to_string(),
            timestamp: "2026-10-15T12:00:00.000Z".to_string(),
        };
        let value = serde_json::to_value(SwapPayload::from(&req)).unwrap();
        assert_eq!(
            value,
            json!({
                "action": "swap",
                "tokenFrom": "RXD",
                "tokenTo": "RADCAT",
                "amount": 1_000_000.0,
                "receivingAmount": 169_750.0,
                "walletAddress": "1PhotonicWallet",
                "timestamp": "2026-10-15T12:00:00.000Z"
            })
        );
    }

    #[test]
    fn test_verify_payload_keeps_amount_as_text() {
        let req = VerificationRequest {
            transaction_id: "abc123".to_string(),
            wallet_address: "1PhotonicWallet".to_string(),
            token_from: "RXD".to_string(),
            token_to: "RADCAT".to_string(),
            amount: "1000000".to_string(),
            timestamp: "2026-10-15T12:00:00.000Z".to_string(),
        };
        let value = serde_json::to_value(VerifyPayload::from(&req)).unwrap();
        assert_eq!(value["action"], "verify");
        assert_eq!(value["transactionId"], "abc123");
        assert_eq!(value["amount"], json!("1000000"));
        assert_eq!(value["tokenTo"], "RADCAT");
    }
}
