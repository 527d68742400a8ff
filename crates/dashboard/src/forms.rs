//! Dialog drafts and the validated inputs they produce
//!
//! Each dialog owns its own draft. A draft is seeded when the dialog
//! opens, edited field by field, and turned into a `New*` value when
//! submitted. Record and appointment drafts take the selected patient at
//! submit time rather than when they were opened.

use aptos_health_types::{parse_age, require, RecordType, ValidationError};
use chrono::{DateTime, Utc};

/// Default time offered by the appointment form
pub const DEFAULT_APPOINTMENT_TIME: &str = "09:00";

/// Genders offered by the patient form
pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

/// `PREFIX-` followed by the last six digits of the millisecond clock
pub fn generate_id(prefix: &str, now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().to_string();
    let tail = &millis[millis.len().saturating_sub(6)..];
    format!("{}-{}", prefix, tail)
}

/// Arguments of `add_patient`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPatient {
    pub id: String,
    pub name: String,
    pub age: u64,
    pub gender: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    pub medical_history: String,
}

/// Arguments of `add_medical_record`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMedicalRecord {
    pub id: String,
    pub patient_id: String,
    pub record_type: RecordType,
    pub diagnosis: String,
    pub treatment: String,
    pub notes: String,
}

/// Arguments of `schedule_appointment`, minus the fixed status
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAppointment {
    pub id: String,
    pub patient_id: String,
    pub date: String,
    pub time: String,
    pub purpose: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientDraft {
    pub id: String,
    pub name: String,
    /// Raw input; parsed on submit
    pub age: String,
    pub gender: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    pub medical_history: String,
}

impl PatientDraft {
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            id: generate_id("PAT", now),
            name: String::new(),
            age: String::new(),
            gender: GENDERS[0].to_string(),
            contact: String::new(),
            email: String::new(),
            address: String::new(),
            medical_history: String::new(),
        }
    }

    pub fn validate(&self) -> Result<NewPatient, ValidationError> {
        require("Patient ID", &self.id)?;
        require("Full Name", &self.name)?;
        let age = parse_age(&self.age)?;
        require("Contact", &self.contact)?;
        require("Email", &self.email)?;
        require("Address", &self.address)?;

        Ok(NewPatient {
            id: self.id.clone(),
            name: self.name.clone(),
            age,
            gender: self.gender.clone(),
            contact: self.contact.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            medical_history: self.medical_history.clone(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MedicalRecordDraft {
    pub id: String,
    pub record_type: RecordType,
    pub diagnosis: String,
    pub treatment: String,
    pub notes: String,
}

impl MedicalRecordDraft {
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            id: generate_id("MR", now),
            record_type: RecordType::Examination,
            diagnosis: String::new(),
            treatment: String::new(),
            notes: String::new(),
        }
    }

    pub fn validate(&self, patient_id: &str) -> Result<NewMedicalRecord, ValidationError> {
        if patient_id.is_empty() {
            return Err(ValidationError::NoPatientSelected);
        }
        require("Record ID", &self.id)?;
        require("Diagnosis", &self.diagnosis)?;
        require("Treatment", &self.treatment)?;

        Ok(NewMedicalRecord {
            id: self.id.clone(),
            patient_id: patient_id.to_string(),
            record_type: self.record_type.clone(),
            diagnosis: self.diagnosis.clone(),
            treatment: self.treatment.clone(),
            notes: self.notes.clone(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub id: String,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM
    pub time: String,
    pub purpose: String,
}

impl AppointmentDraft {
    /// Defaults to today's UTC date at 09:00
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            id: generate_id("APT", now),
            date: now.format("%Y-%m-%d").to_string(),
            time: DEFAULT_APPOINTMENT_TIME.to_string(),
            purpose: String::new(),
        }
    }

    pub fn validate(&self, patient_id: &str) -> Result<NewAppointment, ValidationError> {
        if patient_id.is_empty() {
            return Err(ValidationError::NoPatientSelected);
        }
        require("Appointment ID", &self.id)?;
        require("Date", &self.date)?;
        require("Time", &self.time)?;
        require("Purpose", &self.purpose)?;

        Ok(NewAppointment {
            id: self.id.clone(),
            patient_id: patient_id.to_string(),
            date: self.date.clone(),
            time: self.time.clone(),
            purpose: self.purpose.clone(),
        })
    }
}

/// A modal form: open/closed plus its draft
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dialog<D> {
    open: bool,
    draft: Option<D>,
}

impl<D> Dialog<D> {
    pub fn new() -> Self {
        Self {
            open: false,
            draft: None,
        }
    }

    /// Open with a freshly seeded draft
    pub fn open_with(&mut self, draft: D) {
        self.open = true;
        self.draft = Some(draft);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> Option<&D> {
        self.draft.as_ref()
    }

    /// Only an open dialog can be edited
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        if self.open {
            self.draft.as_mut()
        } else {
            None
        }
    }
}
