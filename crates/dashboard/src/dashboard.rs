//! Dashboard controller state
//!
//! One `Dashboard` per wallet session. Chain reads live in `reader`,
//! writes in `transactions`; this module holds the state they share and
//! the dialog plumbing that feeds validated drafts into the writes.

use crate::forms::{AppointmentDraft, Dialog, MedicalRecordDraft, PatientDraft};
use crate::notice::Notice;
use aptos_health_chain::{ChainClient, ModuleId, Network};
use aptos_health_types::{Appointment, MedicalRecord, Patient};
use aptos_health_wallet::WalletAdapter;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// Source of "now" for id generation and form defaults
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Where the connected provider is in its one-time setup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Only `initialize` is available
    Uninitialized,
    /// `initialize` is in flight
    Initializing,
    Initialized,
}

pub struct Dashboard {
    pub(crate) module: ModuleId,
    pub(crate) client: Option<Arc<dyn ChainClient>>,
    pub(crate) wallet: Option<Arc<dyn WalletAdapter>>,
    pub(crate) account: Option<String>,

    pub(crate) initialized: bool,
    pub(crate) initializing: bool,
    pub(crate) is_loading: bool,

    pub(crate) patients: Vec<Patient>,
    pub(crate) medical_records: Vec<MedicalRecord>,
    pub(crate) appointments: Vec<Appointment>,
    pub(crate) selected_patient_id: Option<String>,
    pub(crate) notices: Vec<Notice>,

    pub(crate) patient_dialog: Dialog<PatientDraft>,
    pub(crate) record_dialog: Dialog<MedicalRecordDraft>,
    pub(crate) appointment_dialog: Dialog<AppointmentDraft>,
    clock: Clock,
}

impl fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dashboard")
            .field("module", &self.module)
            .field("account", &self.account)
            .field("phase", &self.phase())
            .field("patients", &self.patients.len())
            .field("selected_patient_id", &self.selected_patient_id)
            .finish()
    }
}

impl Dashboard {
    pub fn new(module: ModuleId) -> Self {
        Self {
            module,
            client: None,
            wallet: None,
            account: None,
            initialized: false,
            initializing: false,
            is_loading: false,
            patients: Vec::new(),
            medical_records: Vec::new(),
            appointments: Vec::new(),
            selected_patient_id: None,
            notices: Vec::new(),
            patient_dialog: Dialog::new(),
            record_dialog: Dialog::new(),
            appointment_dialog: Dialog::new(),
            clock: Arc::new(Utc::now),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Bind to a connected wallet and its network's client, then load.
    ///
    /// Everything read for a previous account is dropped first.
    pub async fn attach(
        &mut self,
        client: Arc<dyn ChainClient>,
        wallet: Arc<dyn WalletAdapter>,
        account: impl Into<String>,
    ) {
        self.detach();
        self.client = Some(client);
        self.wallet = Some(wallet);
        self.account = Some(account.into());

        self.check_initialized().await;
        if self.initialized {
            self.fetch_patients().await;
        }
    }

    /// Forget the wallet, the client and everything read through them
    pub fn detach(&mut self) {
        self.client = None;
        self.wallet = None;
        self.account = None;
        self.initialized = false;
        self.initializing = false;
        self.patients.clear();
        self.medical_records.clear();
        self.appointments.clear();
        self.selected_patient_id = None;
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    pub fn module(&self) -> &ModuleId {
        &self.module
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// Network of the attached chain client
    pub fn network(&self) -> Option<Network> {
        self.client.as_ref().map(|c| c.network())
    }

    pub fn phase(&self) -> Phase {
        if self.initializing {
            Phase::Initializing
        } else if self.initialized {
            Phase::Initialized
        } else {
            Phase::Uninitialized
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn medical_records(&self) -> &[MedicalRecord] {
        &self.medical_records
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn selected_patient_id(&self) -> Option<&str> {
        self.selected_patient_id.as_deref()
    }

    pub fn selected_patient(&self) -> Option<&Patient> {
        let id = self.selected_patient_id.as_deref()?;
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drain notices for display
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub(crate) fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    // Dialogs

    pub fn open_patient_dialog(&mut self) {
        let draft = PatientDraft::seeded(self.now());
        self.patient_dialog.open_with(draft);
    }

    pub fn open_record_dialog(&mut self) {
        let draft = MedicalRecordDraft::seeded(self.now());
        self.record_dialog.open_with(draft);
    }

    pub fn open_appointment_dialog(&mut self) {
        let draft = AppointmentDraft::seeded(self.now());
        self.appointment_dialog.open_with(draft);
    }

    pub fn patient_dialog(&self) -> &Dialog<PatientDraft> {
        &self.patient_dialog
    }

    pub fn record_dialog(&self) -> &Dialog<MedicalRecordDraft> {
        &self.record_dialog
    }

    pub fn appointment_dialog(&self) -> &Dialog<AppointmentDraft> {
        &self.appointment_dialog
    }

    pub fn patient_draft_mut(&mut self) -> Option<&mut PatientDraft> {
        self.patient_dialog.draft_mut()
    }

    pub fn record_draft_mut(&mut self) -> Option<&mut MedicalRecordDraft> {
        self.record_dialog.draft_mut()
    }

    pub fn appointment_draft_mut(&mut self) -> Option<&mut AppointmentDraft> {
        self.appointment_dialog.draft_mut()
    }

    pub fn close_dialogs(&mut self) {
        self.patient_dialog.close();
        self.record_dialog.close();
        self.appointment_dialog.close();
    }

    /// Submit the patient dialog. Returns whether `add_patient` committed.
    ///
    /// An invalid draft keeps the dialog open; otherwise it closes whatever
    /// the transaction outcome.
    pub async fn submit_patient_dialog(&mut self) -> bool {
        if !self.patient_dialog.is_open() {
            return false;
        }
        let validated = match self.patient_dialog.draft() {
            Some(draft) => draft.validate(),
            None => return false,
        };
        let patient = match validated {
            Ok(patient) => patient,
            Err(e) => {
                self.notify(Notice::failure("Failed to Add Patient", e.to_string()));
                return false;
            }
        };

        let committed = self.add_patient(patient).await.is_some();
        self.patient_dialog.close();
        committed
    }

    pub async fn submit_record_dialog(&mut self) -> bool {
        if !self.record_dialog.is_open() {
            return false;
        }
        let patient_id = self.selected_patient_id.clone().unwrap_or_default();
        let validated = match self.record_dialog.draft() {
            Some(draft) => draft.validate(&patient_id),
            None => return false,
        };
        let record = match validated {
            Ok(record) => record,
            Err(e) => {
                self.notify(Notice::failure("Failed to Add Medical Record", e.to_string()));
                return false;
            }
        };

        let committed = self.add_medical_record(record).await.is_some();
        self.record_dialog.close();
        committed
    }

    pub async fn submit_appointment_dialog(&mut self) -> bool {
        if !self.appointment_dialog.is_open() {
            return false;
        }
        let patient_id = self.selected_patient_id.clone().unwrap_or_default();
        let validated = match self.appointment_dialog.draft() {
            Some(draft) => draft.validate(&patient_id),
            None => return false,
        };
        let appointment = match validated {
            Ok(appointment) => appointment,
            Err(e) => {
                self.notify(Notice::failure("Failed to Schedule Appointment", e.to_string()));
                return false;
            }
        };

        let committed = self.schedule_appointment(appointment).await.is_some();
        self.appointment_dialog.close();
        committed
    }
}
