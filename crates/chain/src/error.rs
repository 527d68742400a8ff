//! Chain client failures

use serde::Deserialize;
use thiserror::Error;

/// Marker the node puts in the message of a missing account resource
pub const RESOURCE_NOT_FOUND: &str = "Resource not found";

#[derive(Debug, Error)]
pub enum ChainError {
    /// The requested account resource does not exist
    #[error("{0}")]
    NotFound(String),
    /// The node answered with a non-success status
    #[error("{message}")]
    Api {
        status: u16,
        error_code: Option<String>,
        message: String,
    },
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Committed but aborted by the VM
    #[error("Transaction {hash} failed: {vm_status}")]
    TransactionFailed { hash: String, vm_status: String },
    #[error("Transaction {hash} was not committed within {timeout_secs}s")]
    Timeout { hash: String, timeout_secs: u64 },
    #[error("Unexpected response from node: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct NodeErrorBody {
    message: Option<String>,
    error_code: Option<String>,
}

impl ChainError {
    /// Build an error from a failed node response body.
    ///
    /// Absence is detected from the message text so that callers can tell
    /// "provider not yet initialized" apart from everything else.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<NodeErrorBody>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|b| b.message.clone())
            .unwrap_or_else(|| format!("HTTP {}: {}", status, body.trim()));
        let error_code = parsed.and_then(|b| b.error_code);

        if message.contains(RESOURCE_NOT_FOUND) {
            return ChainError::NotFound(message);
        }

        ChainError::Api {
            status,
            error_code,
            message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ChainError::NotFound(_))
    }

    /// The node has not indexed the transaction yet
    pub(crate) fn is_unknown_transaction(&self) -> bool {
        match self {
            ChainError::Api {
                status, error_code, ..
            } => *status == 404 || error_code.as_deref() == Some("transaction_not_found"),
            _ => false,
        }
    }
}
