//! Transaction request and response shapes

use crate::payload::EntryFunctionPayload;
use aptos_health_types::wire::u64_flexible;
use serde::{Deserialize, Serialize};

/// Unsigned user transaction as accepted by `encode_submission`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserTransactionRequest {
    pub sender: String,
    #[serde(with = "u64_flexible")]
    pub sequence_number: u64,
    #[serde(with = "u64_flexible")]
    pub max_gas_amount: u64,
    #[serde(with = "u64_flexible")]
    pub gas_unit_price: u64,
    #[serde(with = "u64_flexible")]
    pub expiration_timestamp_secs: u64,
    pub payload: EntryFunctionPayload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "ed25519_signature")]
pub struct Ed25519Signature {
    /// 0x-prefixed hex
    pub public_key: String,
    /// 0x-prefixed hex
    pub signature: String,
}

/// Request body for `POST /transactions`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignedTransactionRequest {
    #[serde(flatten)]
    pub request: UserTransactionRequest,
    pub signature: Ed25519Signature,
}

/// Handle returned by submission
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PendingTransaction {
    pub hash: String,
}

/// Confirmation that a transaction has been committed successfully
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommittedTransaction {
    pub hash: String,
    pub version: u64,
    pub vm_status: String,
}

/// What `GET /transactions/by_hash` reports
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TransactionState {
    Pending,
    Committed {
        version: u64,
        success: bool,
        vm_status: String,
    },
}

impl TransactionState {
    pub(crate) fn from_json(value: &serde_json::Value) -> Result<Self, String> {
        let kind = value
            .get("type")
            .and_then(|t| t.as_str())
            .ok_or_else(|| "transaction without a type".to_string())?;

        if kind == "pending_transaction" {
            return Ok(TransactionState::Pending);
        }

        let success = value
            .get("success")
            .and_then(|s| s.as_bool())
            .ok_or_else(|| format!("{} without a success flag", kind))?;
        let version = match value.get("version") {
            Some(serde_json::Value::String(s)) => s.parse::<u64>().map_err(|e| e.to_string())?,
            Some(serde_json::Value::Number(n)) => n.as_u64().unwrap_or_default(),
            _ => 0,
        };
        let vm_status = value
            .get("vm_status")
            .and_then(|s| s.as_str())
            .unwrap_or_default()
            .to_string();

        Ok(TransactionState::Committed {
            version,
            success,
            vm_status,
        })
    }
}
