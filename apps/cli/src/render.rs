//! Terminal output

use aptos_health_chat::{Category, HistoryEntry, Message};
use aptos_health_dashboard::view::{
    appointment_actions, format_record_date, patient_details, wallet_panel,
};
use aptos_health_dashboard::{Dashboard, Notice, Phase};
use aptos_health_types::AppointmentStatus;
use aptos_health_wallet::WalletSession;
use colored::*;

pub fn header(title: &str) {
    println!("{}", "─".repeat(60));
    println!("{}", title.green().bold());
    println!("{}", "─".repeat(60));
}

pub fn notices(notices: Vec<Notice>) {
    for notice in notices {
        if notice.is_failure() {
            println!("{} {}", notice.title.red().bold(), notice.description);
        } else {
            println!("{} {}", notice.title.green().bold(), notice.description);
        }
    }
}

fn rows(rows: &[(&str, String)]) {
    for (label, value) in rows {
        println!("  {:<16} {}", format!("{}:", label).dimmed(), value);
    }
}

pub fn wallet(session: &WalletSession) {
    header("WALLET");
    let panel = wallet_panel(session);
    if panel.is_empty() {
        println!("  {}", "Not connected".yellow());
        let available = session.registry().wallets();
        if available.is_empty() {
            println!("  No wallets configured; add a [wallet] section to the config file.");
        }
        for info in available {
            println!("  available: {}", info.name.cyan());
        }
        println!(
            "  {:<16} {}",
            "Auto-reconnect:".dimmed(),
            if session.auto_connect() { "on" } else { "off" }
        );
        return;
    }
    rows(&panel);
}

pub fn status(dashboard: &Dashboard) {
    header("PROVIDER");
    let phase = match dashboard.phase() {
        Phase::Uninitialized => "not initialized".yellow(),
        Phase::Initializing => "initializing".yellow(),
        Phase::Initialized => "initialized".green(),
    };
    println!("  {:<16} {}", "Status:".dimmed(), phase);
    println!(
        "  {:<16} {}",
        "Registry:".dimmed(),
        dashboard.registry_type()
    );
    if dashboard.phase() == Phase::Initialized {
        println!("  {:<16} {}", "Patients:".dimmed(), dashboard.patients().len());
    }
}

pub fn patients(dashboard: &Dashboard) {
    header("PATIENTS");
    if dashboard.patients().is_empty() {
        println!("  No patients yet.");
        return;
    }
    let selected = dashboard.selected_patient_id();
    for patient in dashboard.patients() {
        let marker = if Some(patient.id.as_str()) == selected {
            "▸".cyan().bold()
        } else {
            " ".normal()
        };
        println!(
            "{} {:<12} {} ({}, {})",
            marker,
            patient.id.bold(),
            patient.name,
            patient.age,
            patient.gender
        );
    }

    if let Some(patient) = dashboard.selected_patient() {
        println!();
        rows(&patient_details(patient));
    }
}

pub fn records(dashboard: &Dashboard) {
    header(&format!(
        "MEDICAL RECORDS {}",
        dashboard.selected_patient_id().unwrap_or_default()
    ));
    if dashboard.medical_records().is_empty() {
        println!("  No medical records.");
        return;
    }
    for record in dashboard.medical_records() {
        println!(
            "  {} {} {}",
            record.id.bold(),
            record.record_type.to_string().cyan(),
            format_record_date(record.date).dimmed()
        );
        println!("    Diagnosis: {}", record.diagnosis);
        println!("    Treatment: {}", record.treatment);
        if !record.notes.is_empty() {
            println!("    Notes:     {}", record.notes);
        }
    }
}

pub fn appointments(dashboard: &Dashboard) {
    header(&format!(
        "APPOINTMENTS {}",
        dashboard.selected_patient_id().unwrap_or_default()
    ));
    if dashboard.appointments().is_empty() {
        println!("  No appointments.");
        return;
    }
    for appointment in dashboard.appointments() {
        let status = match appointment.status {
            AppointmentStatus::Scheduled => appointment.status.to_string().blue(),
            AppointmentStatus::Completed => appointment.status.to_string().green(),
            AppointmentStatus::Cancelled => appointment.status.to_string().red(),
            AppointmentStatus::Unrecognized(_) => appointment.status.to_string().normal(),
        };
        println!(
            "  {} {} {} {} [{}]",
            appointment.id.bold(),
            appointment.date,
            appointment.time,
            appointment.purpose,
            status
        );
        let actions: Vec<&str> = appointment_actions(appointment)
            .iter()
            .map(|a| a.label())
            .collect();
        if !actions.is_empty() {
            println!("    {}", actions.join(" | ").dimmed());
        }
    }
}

pub fn chat_message(message: &Message) {
    if !message.is_bot {
        println!("{} {}", "you ›".cyan().bold(), message.text);
        return;
    }
    let tag = message
        .tag()
        .map(|c| format!(" [{}]", c))
        .unwrap_or_default();
    let prefix = format!("agent{} ›", tag);
    let prefix = match message.category {
        Some(Category::Error) => prefix.red().bold(),
        Some(Category::Success) => prefix.green().bold(),
        _ => prefix.magenta().bold(),
    };
    println!("{} {}", prefix, message.text);
}

pub fn history(entries: &[HistoryEntry]) {
    header("CHAT HISTORY");
    if entries.is_empty() {
        println!("  Empty.");
    }
    for entry in entries {
        println!("  {:<10} {}", format!("{}:", entry.role).dimmed(), entry.content);
    }
}
