//! Aptos Health Entity Types
//!
//! Defines the entries held by a provider's on-chain `ProviderRegistry`
//! resource: patients, medical records and appointments.
//!
//! The registry is append-only from the client's point of view. Patients
//! and medical records are never modified after creation; appointments
//! only change their status.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod validation;
pub mod wire;

pub use validation::{parse_age, require, ValidationError, MAX_PATIENT_AGE};

/// Name of the Move struct that holds a provider's data
pub const REGISTRY_STRUCT: &str = "ProviderRegistry";

/// Patient demographics as stored in the registry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Caller-assigned identifier, unique within the registry (PAT-XXXXXX)
    pub id: String,
    pub name: String,
    /// Move `u64`; the node renders it as a decimal string
    #[serde(with = "wire::u64_flexible")]
    pub age: u64,
    pub gender: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    /// Free-text history entered at intake
    #[serde(default)]
    pub medical_history: String,
}

/// Kind of clinical entry a medical record documents
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecordType {
    Examination,
    LabTest,
    Surgery,
    Prescription,
    Other,
    /// Value written by another client that this one does not know about
    Unrecognized(String),
}

impl RecordType {
    /// Every type offered by the record form, in display order
    pub const ALL: [RecordType; 5] = [
        RecordType::Examination,
        RecordType::LabTest,
        RecordType::Surgery,
        RecordType::Prescription,
        RecordType::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            RecordType::Examination => "Examination",
            RecordType::LabTest => "Lab Test",
            RecordType::Surgery => "Surgery",
            RecordType::Prescription => "Prescription",
            RecordType::Other => "Other",
            RecordType::Unrecognized(raw) => raw,
        }
    }
}

impl Default for RecordType {
    fn default() -> Self {
        RecordType::Examination
    }
}

impl From<&str> for RecordType {
    fn from(value: &str) -> Self {
        match value {
            "Examination" => RecordType::Examination,
            "Lab Test" => RecordType::LabTest,
            "Surgery" => RecordType::Surgery,
            "Prescription" => RecordType::Prescription,
            "Other" => RecordType::Other,
            other => RecordType::Unrecognized(other.to_string()),
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(RecordType::from(raw.as_str()))
    }
}

/// A clinical entry attached to a patient
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: String,
    /// References `Patient::id` in the same registry
    pub patient_id: String,
    pub record_type: RecordType,
    pub diagnosis: String,
    pub treatment: String,
    #[serde(default)]
    pub notes: String,
    /// Assigned by the chain at insertion (epoch seconds)
    #[serde(with = "wire::u64_flexible")]
    pub date: u64,
}

/// Lifecycle of an appointment
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    Unrecognized(String),
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for AppointmentStatus {
    fn from(value: &str) -> Self {
        match value {
            "scheduled" => AppointmentStatus::Scheduled,
            "completed" => AppointmentStatus::Completed,
            "cancelled" => AppointmentStatus::Cancelled,
            other => AppointmentStatus::Unrecognized(other.to_string()),
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for AppointmentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AppointmentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(AppointmentStatus::from(raw.as_str()))
    }
}

/// A scheduled visit for a patient
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    /// Calendar date as entered (YYYY-MM-DD)
    pub date: String,
    /// Wall-clock time as entered (HH:MM)
    pub time: String,
    pub purpose: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Only scheduled appointments can still be completed or cancelled
    pub fn is_open(&self) -> bool {
        self.status == AppointmentStatus::Scheduled
    }
}

/// The single on-chain aggregate owned by a provider account
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRegistry {
    #[serde(default, deserialize_with = "wire::null_as_empty")]
    pub patients: Vec<Patient>,
    #[serde(default, deserialize_with = "wire::null_as_empty")]
    pub medical_records: Vec<MedicalRecord>,
    #[serde(default, deserialize_with = "wire::null_as_empty")]
    pub appointments: Vec<Appointment>,
}

impl ProviderRegistry {
    /// Decode a registry from an account resource document.
    ///
    /// Accepts both the node's `{ "type": .., "data": {..} }` envelope and
    /// the bare data object.
    pub fn from_resource(resource: &serde_json::Value) -> Result<Self, serde_json::Error> {
        let data = match resource.get("data") {
            Some(data) if data.is_object() => data,
            _ => resource,
        };
        ProviderRegistry::deserialize(data)
    }

    pub fn patient(&self, patient_id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == patient_id)
    }

    /// Records belonging to one patient, in registry order
    pub fn records_for(&self, patient_id: &str) -> Vec<MedicalRecord> {
        self.medical_records
            .iter()
            .filter(|r| r.patient_id == patient_id)
            .cloned()
            .collect()
    }

    /// Appointments belonging to one patient, in registry order
    pub fn appointments_for(&self, patient_id: &str) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.patient_id == patient_id)
            .cloned()
            .collect()
    }
}
