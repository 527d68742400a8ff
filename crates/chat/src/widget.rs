//! Chat panel controller

use crate::backend::{ChatBackend, ChatRequest, HistoryEntry};
use crate::error::ChatError;
use crate::intake::PatientIntakeForm;
use crate::message::{classify, Category, Message};
use crate::WALLET_PLACEHOLDER;
use aptos_health_wallet::format_address;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};

pub const GREETING: &str = "Hello! I'm your Aptos Healthcare Agent. I can help you manage patients, medical records, and appointments on the blockchain. What would you like to do today?";
pub const HISTORY_CLEARED: &str = "Chat history has been cleared. How can I help you today?";
pub const BALANCE_QUESTION: &str = "What is my wallet balance?";
pub const CONNECTION_FAILURE: &str =
    "Sorry, I'm having trouble connecting to the Aptos blockchain. Please try again later.";
pub const BALANCE_FAILURE: &str =
    "Sorry, I couldn't fetch your wallet balance. Please try again later.";
pub const INTAKE_FAILURE: &str =
    "There was an error adding the patient to the blockchain. Please try again later.";

pub struct ChatWidget {
    backend: Arc<dyn ChatBackend>,
    messages: Vec<Message>,
    is_open: bool,
    is_typing: bool,
    is_submitting: bool,
    show_intake: bool,
    intake: PatientIntakeForm,
    /// Wallet the agent service reported on its health endpoint
    agent_wallet: Option<String>,
    last_id: i64,
}

impl ChatWidget {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            messages: Vec::new(),
            is_open: false,
            is_typing: false,
            is_submitting: false,
            show_intake: false,
            intake: PatientIntakeForm::default(),
            agent_wallet: None,
            last_id: 0,
        }
    }

    fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }

    fn push(&mut self, text: impl Into<String>, is_bot: bool, category: Option<Category>) {
        let id = self.next_id();
        self.messages.push(Message {
            id,
            text: text.into(),
            is_bot,
            category,
            sent_at: Utc::now(),
        });
    }

    fn push_user(&mut self, text: impl Into<String>) {
        self.push(text, false, None);
    }

    fn push_bot(&mut self, text: impl Into<String>, category: Category) {
        self.push(text, true, Some(category));
    }

    fn request(message: String, address: Option<&str>) -> ChatRequest {
        ChatRequest {
            message,
            address: Some(address.unwrap_or(WALLET_PLACEHOLDER).to_string()),
        }
    }

    /// Open the panel. An empty transcript probes the service and greets.
    pub async fn open(&mut self) {
        self.is_open = true;
        if !self.messages.is_empty() {
            return;
        }

        match self.backend.health().await {
            Ok(health) => {
                debug!(status = ?health.status, "chat service health");
                if let Some(address) = health.wallet_address {
                    self.agent_wallet = Some(address);
                }
            }
            Err(e) => warn!(error = %e, "chat service health check failed"),
        }
        self.push_bot(GREETING, Category::Greeting);
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Send free text; blank input is ignored
    pub async fn send(&mut self, text: &str, address: Option<&str>) {
        if text.trim().is_empty() {
            return;
        }
        self.push_user(text);
        self.is_typing = true;

        let request = Self::request(text.to_string(), address);
        match self.backend.chat(&request).await {
            Ok(reply) => {
                let category = classify(&reply.response);
                self.push_bot(reply.response, category);
            }
            Err(e) => {
                warn!(error = %e, "chat request failed");
                self.push_bot(CONNECTION_FAILURE, Category::Error);
            }
        }
        self.is_typing = false;
    }

    /// Ask the agent for the wallet balance
    pub async fn check_balance(&mut self, address: Option<&str>) {
        self.is_typing = true;
        let request = Self::request(BALANCE_QUESTION.to_string(), address);
        let reply = self.backend.chat(&request).await;
        self.is_typing = false;

        self.push_user(BALANCE_QUESTION);
        match reply {
            Ok(reply) => self.push_bot(reply.response, Category::Wallet),
            Err(e) => {
                warn!(error = %e, "balance request failed");
                self.push_bot(BALANCE_FAILURE, Category::Error);
            }
        }
    }

    pub fn toggle_intake(&mut self) {
        self.show_intake = !self.show_intake;
    }

    pub fn intake(&self) -> &PatientIntakeForm {
        &self.intake
    }

    pub fn intake_mut(&mut self) -> &mut PatientIntakeForm {
        &mut self.intake
    }

    /// Send the intake form as a message.
    ///
    /// On success the form closes and resets; on failure it stays as typed.
    pub async fn submit_intake(&mut self, address: Option<&str>) {
        if self.is_submitting {
            return;
        }
        self.is_submitting = true;

        let text = self.intake.to_message();
        let request = Self::request(text.clone(), address);
        let reply = self.backend.chat(&request).await;
        self.is_submitting = false;

        match reply {
            Ok(reply) => {
                self.show_intake = false;
                self.push_user(text);
                self.push_bot(reply.response, Category::Healthcare);
                self.intake.reset();
            }
            Err(e) => {
                warn!(error = %e, "patient intake failed");
                self.push_user(text);
                self.push_bot(INTAKE_FAILURE, Category::Error);
            }
        }
    }

    /// Reset the server-side history; the transcript is kept if that fails
    pub async fn clear_history(&mut self) {
        match self.backend.clear_history().await {
            Ok(()) => {
                self.messages.clear();
                self.push_bot(HISTORY_CLEARED, Category::System);
            }
            Err(e) => warn!(error = %e, "failed to clear chat history"),
        }
    }

    pub async fn history(&self) -> Result<Vec<HistoryEntry>, ChatError> {
        self.backend.history().await
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// Disables the intake submit control
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn show_intake(&self) -> bool {
        self.show_intake
    }

    /// Header line: the connected wallet, else whatever the agent reported
    pub fn wallet_label(&self, connected: Option<&str>) -> Option<String> {
        connected
            .or(self.agent_wallet.as_deref())
            .map(|address| format!("Address: {}", format_address(address)))
    }
}
