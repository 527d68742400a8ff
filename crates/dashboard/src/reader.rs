//! Provider-registry reads
//!
//! Every read fetches the whole `ProviderRegistry` resource and filters
//! locally. Missing client, account or initialization make a read a
//! no-op; failed reads are logged and leave the lists as they were.

use crate::dashboard::Dashboard;
use aptos_health_chain::{ChainClient, ChainError};
use aptos_health_types::{ProviderRegistry, REGISTRY_STRUCT};
use std::sync::Arc;
use tracing::{debug, warn};

impl Dashboard {
    /// Fully qualified type of the registry resource
    pub fn registry_type(&self) -> String {
        self.module.struct_tag(REGISTRY_STRUCT)
    }

    fn read_target(&self) -> Option<(Arc<dyn ChainClient>, String)> {
        match (&self.client, &self.account) {
            (Some(client), Some(account)) => Some((client.clone(), account.clone())),
            _ => None,
        }
    }

    async fn read_registry(
        &self,
        client: &dyn ChainClient,
        account: &str,
    ) -> Result<ProviderRegistry, ChainError> {
        let resource = client
            .get_account_resource(account, &self.registry_type())
            .await?;
        ProviderRegistry::from_resource(&resource).map_err(|e| ChainError::Decode(e.to_string()))
    }

    /// Initialized means the registry resource exists under the account.
    ///
    /// Only a not-found answer marks the provider uninitialized; any other
    /// failure leaves the flag alone.
    pub async fn check_initialized(&mut self) {
        let Some((client, account)) = self.read_target() else {
            return;
        };
        match client
            .get_account_resource(&account, &self.registry_type())
            .await
        {
            Ok(_) => self.initialized = true,
            Err(e) if e.is_not_found() => {
                debug!(%account, "no provider registry");
                self.initialized = false;
            }
            Err(e) => warn!(%account, error = %e, "could not check provider initialization"),
        }
    }

    /// Load patients; selects the first one when nothing is selected yet
    pub async fn fetch_patients(&mut self) {
        if !self.initialized {
            return;
        }
        let Some((client, account)) = self.read_target() else {
            return;
        };

        match self.read_registry(client.as_ref(), &account).await {
            Ok(registry) => {
                self.patients = registry.patients;
                if self.selected_patient_id.is_none() {
                    if let Some(first) = self.patients.first().map(|p| p.id.clone()) {
                        self.select_patient(&first).await;
                    }
                }
            }
            Err(e) => warn!(%account, error = %e, "failed to fetch patients"),
        }
    }

    pub async fn fetch_medical_records(&mut self, patient_id: &str) {
        if patient_id.is_empty() || !self.initialized {
            return;
        }
        let Some((client, account)) = self.read_target() else {
            return;
        };

        match self.read_registry(client.as_ref(), &account).await {
            Ok(registry) => self.medical_records = registry.records_for(patient_id),
            Err(e) => warn!(%account, %patient_id, error = %e, "failed to fetch medical records"),
        }
    }

    pub async fn fetch_appointments(&mut self, patient_id: &str) {
        if patient_id.is_empty() || !self.initialized {
            return;
        }
        let Some((client, account)) = self.read_target() else {
            return;
        };

        match self.read_registry(client.as_ref(), &account).await {
            Ok(registry) => self.appointments = registry.appointments_for(patient_id),
            Err(e) => warn!(%account, %patient_id, error = %e, "failed to fetch appointments"),
        }
    }

    /// Select a patient and load their records and appointments
    pub async fn select_patient(&mut self, patient_id: &str) {
        self.selected_patient_id = Some(patient_id.to_string());
        self.fetch_medical_records(patient_id).await;
        self.fetch_appointments(patient_id).await;
    }

    pub fn clear_selection(&mut self) {
        self.selected_patient_id = None;
        self.medical_records.clear();
        self.appointments.clear();
    }
}
