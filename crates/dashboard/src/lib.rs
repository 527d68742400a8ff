//! Medical Records Dashboard
//!
//! Controller for the provider dashboard:
//! - Provider-registry reads with per-patient filtering (`reader`)
//! - The five healthcare entry functions, submitted and awaited (`transactions`)
//! - Draft state for the patient, record and appointment dialogs (`forms`)
//! - Presentation helpers shared by front ends (`view`)
//!
//! Chain data is never mutated locally. Every successful write is
//! followed by a fresh read of the registry.

pub mod dashboard;
pub mod error;
pub mod forms;
pub mod notice;
pub mod payloads;
pub mod reader;
pub mod transactions;
pub mod view;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use dashboard::{Clock, Dashboard, Phase};
pub use error::DashboardError;
pub use forms::{
    generate_id, AppointmentDraft, Dialog, MedicalRecordDraft, NewAppointment, NewMedicalRecord,
    NewPatient, PatientDraft,
};
pub use notice::{Notice, NoticeVariant};
pub use view::AppointmentAction;
