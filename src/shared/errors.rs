//! Error handling for the application

use thiserror::Error;

use crate::domain::session::Phase;

/// Local input validation failures. Raised before any request is sent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please enter an amount")]
    MissingAmount,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Please enter your wallet address")]
    MissingWalletAddress,

    #[error("Please enter your transaction ID")]
    MissingTransactionId,

    #[error("Unknown token: {0}")]
    UnknownToken(String),
}

/// Gateway (remote endpoint) errors.
///
/// Only local transport failures show up here. A remote-side rejection of a
/// dispatched action cannot be observed because dispatch responses are never read.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else if err.is_decode() {
            GatewayError::InvalidResponse(err.to_string())
        } else {
            GatewayError::Network(err.to_string())
        }
    }
}

/// Session state machine errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Cannot {action} while {phase}")]
    InvalidPhase { action: &'static str, phase: Phase },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("There was an error initiating the swap. Please try again. ({0})")]
    Dispatch(#[from] GatewayError),
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(String),

    #[error("Failed to parse config file: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Gateway error: {0}")]
    GatewayError(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        AppError::GatewayError(err.to_string())
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        AppError::SessionError(err.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::SessionError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_match_prompts() {
        assert_eq!(
            ValidationError::MissingTransactionId.to_string(),
            "Please enter your transaction ID"
        );
        assert_eq!(
            ValidationError::UnknownToken("DOGE".to_string()).to_string(),
            "Unknown token: DOGE"
        );
    }

    #[test]
    fn test_session_error_wraps_validation_transparently() {
        let err: SessionError = ValidationError::MissingWalletAddress.into();
        assert_eq!(err.to_string(), "Please enter your wallet address");
    }

    #[test]
    fn test_invalid_phase_message() {
        let err = SessionError::InvalidPhase { action: "verify", phase: Phase::Idle };
        assert_eq!(err.to_string(), "Cannot verify while idle");
    }
}
