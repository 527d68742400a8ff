//! Healthcare writes
//!
//! Each operation signs through the wallet, waits for commitment through
//! the chain client, reports the outcome as a notice and then re-reads
//! whatever it changed. State is never patched locally.

use crate::dashboard::Dashboard;
use crate::error::DashboardError;
use crate::forms::{NewAppointment, NewMedicalRecord, NewPatient};
use crate::notice::Notice;
use crate::payloads;
use crate::view::AppointmentAction;
use aptos_health_chain::{CommittedTransaction, EntryFunctionPayload};
use aptos_health_types::AppointmentStatus;
use aptos_health_wallet::WalletError;
use tracing::{info, warn};

/// Notice wording for one operation
struct Outcome {
    success_title: &'static str,
    success_description: &'static str,
    failure_title: &'static str,
    fallback: &'static str,
}

const INITIALIZE: Outcome = Outcome {
    success_title: "Provider Initialized",
    success_description: "Healthcare provider has been initialized successfully.",
    failure_title: "Initialization Failed",
    fallback: "Failed to initialize healthcare provider.",
};

const ADD_PATIENT: Outcome = Outcome {
    success_title: "Patient Added",
    success_description: "New patient record has been created successfully.",
    failure_title: "Failed to Add Patient",
    fallback: "An error occurred while adding the patient.",
};

const ADD_MEDICAL_RECORD: Outcome = Outcome {
    success_title: "Medical Record Added",
    success_description: "New medical record has been created successfully.",
    failure_title: "Failed to Add Medical Record",
    fallback: "An error occurred while adding the medical record.",
};

const SCHEDULE_APPOINTMENT: Outcome = Outcome {
    success_title: "Appointment Scheduled",
    success_description: "New appointment has been scheduled successfully.",
    failure_title: "Failed to Schedule Appointment",
    fallback: "An error occurred while scheduling the appointment.",
};

const UPDATE_APPOINTMENT: Outcome = Outcome {
    success_title: "Appointment Updated",
    success_description: "Appointment status has been updated successfully.",
    failure_title: "Failed to Update Appointment",
    fallback: "An error occurred while updating the appointment.",
};

impl Dashboard {
    fn can_write(&self) -> bool {
        self.client.is_some() && self.account.is_some() && self.initialized
    }

    async fn sign_and_wait(
        &self,
        payload: &EntryFunctionPayload,
    ) -> Result<CommittedTransaction, DashboardError> {
        let wallet = self.wallet.clone().ok_or(WalletError::NotConnected)?;
        let client = self.client.clone().ok_or(WalletError::NotConnected)?;

        let pending = wallet.sign_and_submit_transaction(payload).await?;
        let committed = client.wait_for_transaction(&pending.hash).await?;
        Ok(committed)
    }

    /// Submit and report. The caller owns the loading flag and the refresh.
    async fn submit(
        &mut self,
        payload: EntryFunctionPayload,
        outcome: &Outcome,
    ) -> Option<CommittedTransaction> {
        match self.sign_and_wait(&payload).await {
            Ok(committed) => {
                info!(
                    function = payload.function_name(),
                    hash = %committed.hash,
                    version = committed.version,
                    "transaction committed"
                );
                self.notify(Notice::success(
                    outcome.success_title,
                    outcome.success_description,
                ));
                Some(committed)
            }
            Err(e) => {
                warn!(function = payload.function_name(), error = %e, "transaction failed");
                let message = e.to_string();
                let description = if message.trim().is_empty() {
                    outcome.fallback.to_string()
                } else {
                    message
                };
                self.notify(Notice::failure(outcome.failure_title, description));
                None
            }
        }
    }

    /// Create the provider's registry. Available before initialization.
    pub async fn initialize(&mut self) -> Option<CommittedTransaction> {
        if self.client.is_none() || self.account.is_none() {
            return None;
        }
        self.initializing = true;
        self.is_loading = true;

        let payload = payloads::initialize(&self.module);
        let committed = self.submit(payload, &INITIALIZE).await;
        if committed.is_some() {
            self.initialized = true;
            self.fetch_patients().await;
        }

        self.initializing = false;
        self.is_loading = false;
        committed
    }

    pub async fn add_patient(&mut self, patient: NewPatient) -> Option<CommittedTransaction> {
        if !self.can_write() {
            return None;
        }
        self.is_loading = true;

        let payload = payloads::add_patient(&self.module, &patient);
        let committed = self.submit(payload, &ADD_PATIENT).await;
        if committed.is_some() {
            self.fetch_patients().await;
        }

        self.is_loading = false;
        committed
    }

    pub async fn add_medical_record(
        &mut self,
        record: NewMedicalRecord,
    ) -> Option<CommittedTransaction> {
        if !self.can_write() {
            return None;
        }
        self.is_loading = true;

        let payload = payloads::add_medical_record(&self.module, &record);
        let committed = self.submit(payload, &ADD_MEDICAL_RECORD).await;
        if committed.is_some() {
            self.fetch_medical_records(&record.patient_id).await;
        }

        self.is_loading = false;
        committed
    }

    pub async fn schedule_appointment(
        &mut self,
        appointment: NewAppointment,
    ) -> Option<CommittedTransaction> {
        if !self.can_write() {
            return None;
        }
        self.is_loading = true;

        let payload = payloads::schedule_appointment(&self.module, &appointment);
        let committed = self.submit(payload, &SCHEDULE_APPOINTMENT).await;
        if committed.is_some() {
            self.fetch_appointments(&appointment.patient_id).await;
        }

        self.is_loading = false;
        committed
    }

    /// Refreshes the selected patient's appointments, not the appointment's own patient
    pub async fn update_appointment_status(
        &mut self,
        appointment_id: &str,
        status: AppointmentStatus,
    ) -> Option<CommittedTransaction> {
        if !self.can_write() {
            return None;
        }
        self.is_loading = true;

        let payload = payloads::update_appointment_status(&self.module, appointment_id, &status);
        let committed = self.submit(payload, &UPDATE_APPOINTMENT).await;
        if committed.is_some() {
            if let Some(selected) = self.selected_patient_id.clone() {
                self.fetch_appointments(&selected).await;
            }
        }

        self.is_loading = false;
        committed
    }

    pub async fn apply_appointment_action(
        &mut self,
        appointment_id: &str,
        action: AppointmentAction,
    ) -> Option<CommittedTransaction> {
        self.update_appointment_status(appointment_id, action.target_status())
            .await
    }
}
