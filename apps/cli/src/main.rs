//! Aptos Health
//!
//! Terminal front end for the healthcare provider dashboard and the
//! healthcare agent chat.

mod app;
mod chat_repl;
mod config;
mod render;

use anyhow::{bail, Result};
use app::App;
use aptos_health_chat::PatientIntakeForm;
use aptos_health_dashboard::view::appointment_actions;
use aptos_health_dashboard::{AppointmentAction, Dashboard};
use aptos_health_types::RecordType;
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use config::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "aptos-health")]
#[command(about = "Manage patients, medical records and appointments on Aptos")]
struct Cli {
    /// Config file (default: ./aptos-health.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Network to use when the wallet does not report one
    #[arg(long, global = true)]
    network: Option<String>,

    /// Chat service base URL
    #[arg(long, global = true)]
    chat_url: Option<String>,

    /// Wallet to connect for this invocation
    #[arg(short, long, global = true)]
    wallet: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wallet and provider status
    Status,

    /// Manage the wallet connection
    Wallet {
        #[command(subcommand)]
        action: WalletAction,
    },

    /// Create the provider registry for the connected account
    Init,

    /// List patients
    Patients {
        /// Select this patient and show their details
        #[arg(long)]
        select: Option<String>,
    },

    /// Register a new patient
    AddPatient(PatientArgs),

    /// List a patient's medical records
    Records {
        #[arg(short, long)]
        patient: Option<String>,
    },

    /// Add a medical record to a patient
    AddRecord {
        #[arg(short, long)]
        patient: Option<String>,
        /// Record ID (generated when omitted)
        #[arg(long)]
        id: Option<String>,
        /// Examination, Lab Test, Surgery, Prescription or Other
        #[arg(short = 't', long = "type", default_value = "Examination")]
        record_type: String,
        #[arg(long)]
        diagnosis: String,
        #[arg(long)]
        treatment: String,
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List a patient's appointments
    Appointments {
        #[arg(short, long)]
        patient: Option<String>,
    },

    /// Schedule an appointment
    Schedule {
        #[arg(short, long)]
        patient: Option<String>,
        /// Appointment ID (generated when omitted)
        #[arg(long)]
        id: Option<String>,
        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// HH:MM (default: 09:00)
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        purpose: String,
    },

    /// Mark a scheduled appointment as completed
    Complete {
        id: String,
        #[arg(short, long)]
        patient: Option<String>,
    },

    /// Cancel a scheduled appointment
    Cancel {
        id: String,
        #[arg(short, long)]
        patient: Option<String>,
    },

    /// Interactive chat with the healthcare agent
    Chat,

    /// Send one message to the healthcare agent
    ChatSay {
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Ask the agent for the wallet balance
    ChatBalance,

    /// Send a patient intake form to the agent
    ChatIntake(PatientArgs),

    /// Clear the agent's conversation history
    ChatClear,

    /// Show the agent's conversation history
    ChatHistory,
}

#[derive(Subcommand)]
enum WalletAction {
    /// List registered wallets and the current connection
    List,
    /// Connect a wallet (default: the only registered one)
    Connect { name: Option<String> },
    /// Disconnect and forget the last wallet
    Disconnect,
    /// Reconnect the last wallet on future runs
    AutoConnect {
        #[arg(value_enum)]
        state: Toggle,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

#[derive(Args)]
struct PatientArgs {
    /// Patient ID (generated when omitted)
    #[arg(long)]
    id: Option<String>,
    #[arg(long)]
    name: String,
    #[arg(long)]
    age: String,
    #[arg(long, default_value = "Male")]
    gender: String,
    #[arg(long)]
    contact: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    address: String,
    #[arg(long, default_value = "")]
    history: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Select `patient` when given; otherwise keep the automatic selection
async fn focus(dashboard: &mut Dashboard, patient: Option<&str>) -> Result<()> {
    if let Some(id) = patient {
        if !dashboard.patients().iter().any(|p| p.id == id) {
            bail!("No patient with ID {}", id);
        }
        dashboard.select_patient(id).await;
    }
    if dashboard.selected_patient_id().is_none() {
        bail!("No patients yet. Add one with `aptos-health add-patient`.");
    }
    Ok(())
}

/// Apply an appointment action, refusing ones the appointment no longer offers
async fn change_appointment(
    dashboard: &mut Dashboard,
    appointment_id: &str,
    patient: Option<&str>,
    action: AppointmentAction,
) -> Result<()> {
    focus(dashboard, patient).await?;
    if let Some(appointment) = dashboard
        .appointments()
        .iter()
        .find(|a| a.id == appointment_id)
    {
        if !appointment_actions(appointment).contains(&action) {
            bail!(
                "Appointment {} is {}; only scheduled appointments can change",
                appointment_id,
                appointment.status
            );
        }
    }

    dashboard
        .apply_appointment_action(appointment_id, action)
        .await;
    render::notices(dashboard.take_notices());
    render::appointments(dashboard);
    Ok(())
}

fn connected_address(app: &App) -> Option<String> {
    app.session().address().map(str::to_string)
}

async fn run(cli: Cli, mut app: App) -> Result<()> {
    let wallet = cli.wallet.as_deref();

    match cli.command {
        Commands::Status => {
            app.connect(wallet).await?;
            render::wallet(app.session());
            if app.session().connected() {
                let dashboard = app.dashboard(wallet).await?;
                render::status(dashboard);
            }
        }

        Commands::Wallet { action } => match action {
            WalletAction::List => {
                app.connect(wallet).await?;
                render::wallet(app.session());
            }
            WalletAction::Connect { name } => {
                let name = match name.or_else(|| cli.wallet.clone()) {
                    Some(name) => name,
                    None => match app.session().registry().wallets().as_slice() {
                        [only] => only.name.clone(),
                        [] => bail!("No wallets configured; add a [wallet] section to the config file"),
                        _ => bail!("Several wallets are registered; name one"),
                    },
                };
                app.session_mut().connect(&name).await?;
                render::wallet(app.session());
            }
            WalletAction::Disconnect => {
                app.connect(wallet).await?;
                app.session_mut().disconnect().await?;
                println!("{}", "Wallet disconnected".green());
            }
            WalletAction::AutoConnect { state } => {
                let enabled = matches!(state, Toggle::On);
                app.session_mut().set_auto_connect(enabled)?;
                println!(
                    "Auto-reconnect {}",
                    if enabled { "on".green() } else { "off".yellow() }
                );
            }
        },

        Commands::Init => {
            let dashboard = app.dashboard(wallet).await?;
            if dashboard.is_initialized() {
                println!("{}", "Healthcare provider is already initialized.".yellow());
            } else {
                dashboard.initialize().await;
                render::notices(dashboard.take_notices());
            }
            render::status(dashboard);
        }

        Commands::Patients { select } => {
            let dashboard = app.initialized_dashboard(wallet).await?;
            if let Some(id) = select.as_deref() {
                focus(dashboard, Some(id)).await?;
            }
            render::patients(dashboard);
        }

        Commands::AddPatient(args) => {
            let dashboard = app.initialized_dashboard(wallet).await?;
            dashboard.open_patient_dialog();
            if let Some(draft) = dashboard.patient_draft_mut() {
                if let Some(id) = args.id {
                    draft.id = id;
                }
                draft.name = args.name;
                draft.age = args.age;
                draft.gender = args.gender;
                draft.contact = args.contact;
                draft.email = args.email;
                draft.address = args.address;
                draft.medical_history = args.history;
            }
            dashboard.submit_patient_dialog().await;
            dashboard.close_dialogs();
            render::notices(dashboard.take_notices());
            render::patients(dashboard);
        }

        Commands::Records { patient } => {
            let dashboard = app.initialized_dashboard(wallet).await?;
            focus(dashboard, patient.as_deref()).await?;
            render::records(dashboard);
        }

        Commands::AddRecord {
            patient,
            id,
            record_type,
            diagnosis,
            treatment,
            notes,
        } => {
            let dashboard = app.initialized_dashboard(wallet).await?;
            focus(dashboard, patient.as_deref()).await?;
            dashboard.open_record_dialog();
            if let Some(draft) = dashboard.record_draft_mut() {
                if let Some(id) = id {
                    draft.id = id;
                }
                draft.record_type = RecordType::from(record_type.as_str());
                draft.diagnosis = diagnosis;
                draft.treatment = treatment;
                draft.notes = notes;
            }
            dashboard.submit_record_dialog().await;
            dashboard.close_dialogs();
            render::notices(dashboard.take_notices());
            render::records(dashboard);
        }

        Commands::Appointments { patient } => {
            let dashboard = app.initialized_dashboard(wallet).await?;
            focus(dashboard, patient.as_deref()).await?;
            render::appointments(dashboard);
        }

        Commands::Schedule {
            patient,
            id,
            date,
            time,
            purpose,
        } => {
            let dashboard = app.initialized_dashboard(wallet).await?;
            focus(dashboard, patient.as_deref()).await?;
            dashboard.open_appointment_dialog();
            if let Some(draft) = dashboard.appointment_draft_mut() {
                if let Some(id) = id {
                    draft.id = id;
                }
                if let Some(date) = date {
                    draft.date = date;
                }
                if let Some(time) = time {
                    draft.time = time;
                }
                draft.purpose = purpose;
            }
            dashboard.submit_appointment_dialog().await;
            dashboard.close_dialogs();
            render::notices(dashboard.take_notices());
            render::appointments(dashboard);
        }

        Commands::Complete { id, patient } => {
            let dashboard = app.initialized_dashboard(wallet).await?;
            change_appointment(dashboard, &id, patient.as_deref(), AppointmentAction::Complete)
                .await?;
        }

        Commands::Cancel { id, patient } => {
            let dashboard = app.initialized_dashboard(wallet).await?;
            change_appointment(dashboard, &id, patient.as_deref(), AppointmentAction::Cancel)
                .await?;
        }

        Commands::Chat => {
            app.connect(wallet).await?;
            let address = connected_address(&app);
            let mut widget = app.chat_widget();
            chat_repl::run(&mut widget, address.as_deref()).await?;
        }

        Commands::ChatSay { message } => {
            app.connect(wallet).await?;
            let address = connected_address(&app);
            let mut widget = app.chat_widget();
            widget.send(&message.join(" "), address.as_deref()).await;
            if let Some(reply) = widget.messages().last() {
                render::chat_message(reply);
            }
        }

        Commands::ChatBalance => {
            app.connect(wallet).await?;
            let address = connected_address(&app);
            let mut widget = app.chat_widget();
            widget.check_balance(address.as_deref()).await;
            for message in widget.messages() {
                render::chat_message(message);
            }
        }

        Commands::ChatIntake(args) => {
            app.connect(wallet).await?;
            let address = connected_address(&app);
            let mut widget = app.chat_widget();
            widget.toggle_intake();
            *widget.intake_mut() = PatientIntakeForm {
                patient_id: args.id.unwrap_or_default(),
                name: args.name,
                age: args.age,
                gender: args.gender,
                contact: args.contact,
                email: args.email,
                address: args.address,
                medical_history: args.history,
            };
            widget.submit_intake(address.as_deref()).await;
            for message in widget.messages() {
                render::chat_message(message);
            }
        }

        Commands::ChatClear => {
            let mut widget = app.chat_widget();
            widget.clear_history().await;
            match widget.messages().first() {
                Some(message) => render::chat_message(message),
                None => bail!("Could not clear chat history"),
            }
        }

        Commands::ChatHistory => {
            let widget = app.chat_widget();
            let entries = widget.history().await?;
            render::history(&entries);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(network) = &cli.network {
        config.network = network.clone();
        if let Some(wallet) = config.wallet.as_mut() {
            wallet.network = network.clone();
        }
    }
    if let Some(url) = &cli.chat_url {
        config.chat.url = url.clone();
    }
    init_logging(&config.logging.level);

    let app = App::new(config)?;
    if let Err(e) = run(cli, app).await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
    Ok(())
}
