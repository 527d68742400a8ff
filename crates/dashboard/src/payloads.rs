//! Entry function payloads for the healthcare module
//!
//! Argument order is positional and must match the Move signatures.

use crate::forms::{NewAppointment, NewMedicalRecord, NewPatient};
use aptos_health_chain::{EntryFunctionPayload, ModuleId, MoveValue};
use aptos_health_types::AppointmentStatus;

pub fn initialize(module: &ModuleId) -> EntryFunctionPayload {
    EntryFunctionPayload::new(module.function("initialize"), Vec::new())
}

pub fn add_patient(module: &ModuleId, patient: &NewPatient) -> EntryFunctionPayload {
    EntryFunctionPayload::new(
        module.function("add_patient"),
        vec![
            MoveValue::from(patient.id.as_str()),
            MoveValue::from(patient.name.as_str()),
            MoveValue::from(patient.age),
            MoveValue::from(patient.gender.as_str()),
            MoveValue::from(patient.contact.as_str()),
            MoveValue::from(patient.email.as_str()),
            MoveValue::from(patient.address.as_str()),
            MoveValue::from(patient.medical_history.as_str()),
        ],
    )
}

pub fn add_medical_record(module: &ModuleId, record: &NewMedicalRecord) -> EntryFunctionPayload {
    EntryFunctionPayload::new(
        module.function("add_medical_record"),
        vec![
            MoveValue::from(record.id.as_str()),
            MoveValue::from(record.patient_id.as_str()),
            MoveValue::from(record.record_type.as_str()),
            MoveValue::from(record.diagnosis.as_str()),
            MoveValue::from(record.treatment.as_str()),
            MoveValue::from(record.notes.as_str()),
        ],
    )
}

/// New appointments always start out `scheduled`
pub fn schedule_appointment(module: &ModuleId, appointment: &NewAppointment) -> EntryFunctionPayload {
    EntryFunctionPayload::new(
        module.function("schedule_appointment"),
        vec![
            MoveValue::from(appointment.id.as_str()),
            MoveValue::from(appointment.patient_id.as_str()),
            MoveValue::from(appointment.date.as_str()),
            MoveValue::from(appointment.time.as_str()),
            MoveValue::from(appointment.purpose.as_str()),
            MoveValue::from(AppointmentStatus::Scheduled.as_str()),
        ],
    )
}

pub fn update_appointment_status(
    module: &ModuleId,
    appointment_id: &str,
    status: &AppointmentStatus,
) -> EntryFunctionPayload {
    EntryFunctionPayload::new(
        module.function("update_appointment_status"),
        vec![
            MoveValue::from(appointment_id),
            MoveValue::from(status.as_str()),
        ],
    )
}
