//! Session domain - the swap form state machine

mod swap_session;

pub use swap_session::SwapSession;

use serde::Serialize;
use std::fmt;

/// Which view the session is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Composing a swap
    Idle,
    /// Swap dispatched, waiting for the user's transaction ID
    ResultShown,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::ResultShown => write!(f, "showing the swap result"),
        }
    }
}

/// Outcome of the last verification dispatch.
///
/// `Success` means the request was sent, not that the remote side
/// confirmed the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum VerificationStatus {
    #[default]
    None,
    Success,
    Error,
}
