//! Presentation helpers shared by front ends

use aptos_health_types::{Appointment, AppointmentStatus, Patient};
use aptos_health_wallet::{format_address, WalletSession};
use chrono::{Local, TimeZone};

/// Patient detail grid as label/value rows
pub fn patient_details(patient: &Patient) -> Vec<(&'static str, String)> {
    vec![
        ("Patient ID", patient.id.clone()),
        ("Name", patient.name.clone()),
        ("Age", patient.age.to_string()),
        ("Gender", patient.gender.clone()),
        ("Contact", patient.contact.clone()),
        ("Email", patient.email.clone()),
        ("Address", patient.address.clone()),
        ("Medical History", patient.medical_history.clone()),
    ]
}

/// Chain timestamps are epoch seconds; show them in local time
pub fn format_record_date(epoch_secs: u64) -> String {
    i64::try_from(epoch_secs)
        .ok()
        .and_then(|secs| Local.timestamp_opt(secs, 0).single())
        .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| epoch_secs.to_string())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppointmentAction {
    Complete,
    Cancel,
}

impl AppointmentAction {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentAction::Complete => "Mark as Completed",
            AppointmentAction::Cancel => "Cancel",
        }
    }

    /// Status the action moves the appointment to
    pub fn target_status(&self) -> AppointmentStatus {
        match self {
            AppointmentAction::Complete => AppointmentStatus::Completed,
            AppointmentAction::Cancel => AppointmentStatus::Cancelled,
        }
    }
}

/// Completed and cancelled appointments offer nothing
pub fn appointment_actions(appointment: &Appointment) -> Vec<AppointmentAction> {
    if appointment.is_open() {
        vec![AppointmentAction::Complete, AppointmentAction::Cancel]
    } else {
        Vec::new()
    }
}

/// Rows of the wallet panel; empty while disconnected
pub fn wallet_panel(session: &WalletSession) -> Vec<(&'static str, String)> {
    let Some(address) = session.address() else {
        return Vec::new();
    };
    let wallet = session
        .wallet()
        .map(|w| w.name)
        .unwrap_or_else(|| "Unknown".to_string());
    let network = session
        .network()
        .map(|n| n.name)
        .unwrap_or_else(|| "Unknown".to_string());
    let auto = if session.auto_connect() { "on" } else { "off" };

    vec![
        ("Wallet", wallet),
        ("Address", format_address(address)),
        ("Network", network),
        ("Auto-reconnect", auto.to_string()),
    ]
}
