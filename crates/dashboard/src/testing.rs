//! In-memory ledger for tests
//!
//! `MockLedger` plays both the node and the wallet: submissions are
//! applied to a local `ProviderRegistry` with the same abort rules as the
//! healthcare module, and reads serve that registry back in the node's
//! resource envelope.

use aptos_health_chain::{
    ChainClient, ChainError, CommittedTransaction, EntryFunctionPayload, Network,
    PendingTransaction,
};
use aptos_health_types::{
    Appointment, AppointmentStatus, MedicalRecord, Patient, ProviderRegistry, RecordType,
};
use aptos_health_wallet::{AccountInfo, NetworkInfo, WalletAdapter, WalletError, WalletInfo};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex, MutexGuard};

/// 2024-01-01T00:00:00Z
pub const LEDGER_EPOCH_SECS: u64 = 1_704_067_200;

#[derive(Default)]
struct LedgerState {
    registry: Option<ProviderRegistry>,
    /// (hash, abort status) in submission order; `None` when executed successfully
    outcomes: Vec<(String, Option<String>)>,
    submitted: Vec<EntryFunctionPayload>,
    reads: usize,
    fail_next_read: Option<String>,
    fail_next_submission: Option<String>,
    now_secs: u64,
}

pub struct MockLedger {
    address: String,
    state: Mutex<LedgerState>,
}

impl MockLedger {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            state: Mutex::new(LedgerState {
                now_secs: LEDGER_EPOCH_SECS,
                ..LedgerState::default()
            }),
        }
    }

    pub fn shared(address: &str) -> Arc<Self> {
        Arc::new(Self::new(address))
    }

    fn state(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn address(&self) -> String {
        self.address.clone()
    }

    /// Pretend `initialize` already ran, with this content
    pub fn seed_registry(&self, registry: ProviderRegistry) {
        self.state().registry = Some(registry);
    }

    /// Drop the registry resource, as if the account never ran `initialize`
    pub fn clear_registry(&self) {
        self.state().registry = None;
    }

    pub fn registry(&self) -> Option<ProviderRegistry> {
        self.state().registry.clone()
    }

    pub fn submitted(&self) -> Vec<EntryFunctionPayload> {
        self.state().submitted.clone()
    }

    /// Number of resource reads served
    pub fn reads(&self) -> usize {
        self.state().reads
    }

    pub fn set_now(&self, secs: u64) {
        self.state().now_secs = secs;
    }

    /// Fail the next resource read with a node error
    pub fn fail_next_read(&self, message: &str) {
        self.state().fail_next_read = Some(message.to_string());
    }

    /// Reject the next signature request
    pub fn fail_next_submission(&self, message: &str) {
        self.state().fail_next_submission = Some(message.to_string());
    }
}

fn arg(args: &[Value], index: usize) -> String {
    args.get(index)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Execute one entry function against the registry
fn apply(state: &mut LedgerState, payload: &EntryFunctionPayload) -> Result<(), String> {
    let args = payload.arguments_json();
    let now = state.now_secs;

    if payload.function_name() == "initialize" {
        if state.registry.is_some() {
            return Err("Move abort: E_ALREADY_INITIALIZED".to_string());
        }
        state.registry = Some(ProviderRegistry::default());
        return Ok(());
    }

    let registry = state
        .registry
        .as_mut()
        .ok_or_else(|| "Move abort: E_NOT_INITIALIZED".to_string())?;

    match payload.function_name() {
        "add_patient" => {
            let id = arg(&args, 0);
            if registry.patient(&id).is_some() {
                return Err("Move abort: E_PATIENT_EXISTS".to_string());
            }
            let age = arg(&args, 2)
                .parse::<u64>()
                .map_err(|_| "Failed to deserialize argument 2".to_string())?;
            registry.patients.push(Patient {
                id,
                name: arg(&args, 1),
                age,
                gender: arg(&args, 3),
                contact: arg(&args, 4),
                email: arg(&args, 5),
                address: arg(&args, 6),
                medical_history: arg(&args, 7),
            });
        }
        "add_medical_record" => {
            let patient_id = arg(&args, 1);
            if registry.patient(&patient_id).is_none() {
                return Err("Move abort: E_PATIENT_NOT_FOUND".to_string());
            }
            registry.medical_records.push(MedicalRecord {
                id: arg(&args, 0),
                patient_id,
                record_type: RecordType::from(arg(&args, 2).as_str()),
                diagnosis: arg(&args, 3),
                treatment: arg(&args, 4),
                notes: arg(&args, 5),
                date: now,
            });
        }
        "schedule_appointment" => {
            let patient_id = arg(&args, 1);
            if registry.patient(&patient_id).is_none() {
                return Err("Move abort: E_PATIENT_NOT_FOUND".to_string());
            }
            registry.appointments.push(Appointment {
                id: arg(&args, 0),
                patient_id,
                date: arg(&args, 2),
                time: arg(&args, 3),
                purpose: arg(&args, 4),
                status: AppointmentStatus::from(arg(&args, 5).as_str()),
            });
        }
        "update_appointment_status" => {
            let id = arg(&args, 0);
            let appointment = registry
                .appointments
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or_else(|| "Move abort: E_APPOINTMENT_NOT_FOUND".to_string())?;
            appointment.status = AppointmentStatus::from(arg(&args, 1).as_str());
        }
        other => return Err(format!("FUNCTION_RESOLUTION_FAILURE: {}", other)),
    }
    Ok(())
}

#[async_trait]
impl ChainClient for MockLedger {
    fn network(&self) -> Network {
        Network::Testnet
    }

    async fn get_account_resource(
        &self,
        address: &str,
        resource_type: &str,
    ) -> Result<Value, ChainError> {
        let mut state = self.state();
        if let Some(message) = state.fail_next_read.take() {
            return Err(ChainError::Api {
                status: 503,
                error_code: None,
                message,
            });
        }
        state.reads += 1;

        match (&state.registry, address == self.address) {
            (Some(registry), true) => {
                let data = serde_json::to_value(registry)
                    .map_err(|e| ChainError::Decode(e.to_string()))?;
                Ok(json!({ "type": resource_type, "data": data }))
            }
            _ => Err(ChainError::NotFound(format!(
                "Resource not found by Address({}), Struct tag({})",
                address, resource_type
            ))),
        }
    }

    async fn wait_for_transaction(&self, hash: &str) -> Result<CommittedTransaction, ChainError> {
        let state = self.state();
        let found = state
            .outcomes
            .iter()
            .enumerate()
            .find(|(_, (h, _))| h == hash);
        match found {
            Some((version, (_, None))) => Ok(CommittedTransaction {
                hash: hash.to_string(),
                version: version as u64,
                vm_status: "Executed successfully".to_string(),
            }),
            Some((_, (_, Some(abort)))) => Err(ChainError::TransactionFailed {
                hash: hash.to_string(),
                vm_status: abort.clone(),
            }),
            None => Err(ChainError::Timeout {
                hash: hash.to_string(),
                timeout_secs: 0,
            }),
        }
    }
}

#[async_trait]
impl WalletAdapter for MockLedger {
    fn info(&self) -> WalletInfo {
        WalletInfo {
            name: "Mock Ledger".to_string(),
            icon: None,
        }
    }

    async fn connect(&self) -> Result<AccountInfo, WalletError> {
        Ok(AccountInfo {
            address: self.address.clone(),
            public_key: None,
        })
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        Ok(())
    }

    fn network(&self) -> Option<NetworkInfo> {
        Some(NetworkInfo {
            name: Network::Testnet.as_str().to_string(),
            chain_id: Some(Network::Testnet.chain_id()),
            url: None,
        })
    }

    async fn sign_and_submit_transaction(
        &self,
        payload: &EntryFunctionPayload,
    ) -> Result<PendingTransaction, WalletError> {
        let mut state = self.state();
        if let Some(message) = state.fail_next_submission.take() {
            return Err(WalletError::Rejected(message));
        }

        state.submitted.push(payload.clone());
        let hash = format!("0x{:064x}", state.submitted.len());
        let outcome = apply(&mut state, payload).err();
        state.outcomes.push((hash.clone(), outcome));
        Ok(PendingTransaction { hash })
    }
}

/// A complete patient with placeholder demographics
pub fn sample_patient(id: &str) -> Patient {
    Patient {
        id: id.to_string(),
        name: format!("Patient {}", id),
        age: 40,
        gender: "Other".to_string(),
        contact: "+1-555-0100".to_string(),
        email: "patient@example.com".to_string(),
        address: "1 Clinic Way".to_string(),
        medical_history: String::new(),
    }
}
