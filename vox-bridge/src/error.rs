//! Bridge error type.

use thiserror::Error;

/// Errors from the protocol bridge and call state machine.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A call lifecycle transition that the state machine forbids.
    #[error("invalid call transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// Malformed wire payload.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl BridgeError {
    pub fn invalid_transition(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::InvalidTransition { from: from.into(), to: to.into() }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
