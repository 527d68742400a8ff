//! Chat Widget Tests
//!
//! Conversations against a scripted agent backend.

use aptos_health_chat::{ChatBackend, ChatError, ChatReply, ChatRequest, HealthStatus, HistoryEntry};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Agent that answers from a script and records what it was sent
#[derive(Default)]
pub struct ScriptedAgent {
    replies: Mutex<VecDeque<Option<String>>>,
    requests: Mutex<Vec<ChatRequest>>,
    history: Mutex<Vec<HistoryEntry>>,
    offline: bool,
}

impl ScriptedAgent {
    pub fn new(replies: &[Option<&str>]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| r.map(str::to_string)).collect()),
            ..Self::default()
        }
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn unavailable() -> ChatError {
        ChatError::Status {
            status: 503,
            body: "agent offline".to_string(),
        }
    }
}

#[async_trait]
impl ChatBackend for ScriptedAgent {
    async fn health(&self) -> Result<HealthStatus, ChatError> {
        if self.offline {
            return Err(Self::unavailable());
        }
        Ok(HealthStatus {
            status: Some("healthy".to_string()),
            wallet_address: None,
        })
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        if self.offline {
            return Err(Self::unavailable());
        }
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        if let Ok(mut history) = self.history.lock() {
            history.push(HistoryEntry {
                role: "user".to_string(),
                content: request.message.clone(),
            });
        }
        let next = self
            .replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front())
            .flatten();
        match next {
            Some(response) => Ok(ChatReply { response }),
            None => Err(Self::unavailable()),
        }
    }

    async fn clear_history(&self) -> Result<(), ChatError> {
        if self.offline {
            return Err(Self::unavailable());
        }
        if let Ok(mut history) = self.history.lock() {
            history.clear();
        }
        Ok(())
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, ChatError> {
        Ok(self.history.lock().map(|h| h.clone()).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::PROVIDER;
    use aptos_health_chat::widget::{BALANCE_FAILURE, CONNECTION_FAILURE, GREETING, HISTORY_CLEARED};
    use aptos_health_chat::{Category, ChatWidget, WALLET_PLACEHOLDER};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_greeting_then_classified_reply() {
        let agent = Arc::new(ScriptedAgent::new(&[Some("No error adding patient")]));
        let mut widget = ChatWidget::new(agent.clone());

        widget.open().await;
        assert_eq!(widget.messages()[0].text, GREETING);
        assert_eq!(widget.messages()[0].tag(), None);

        widget.send("Add patient PAT-1", Some(PROVIDER)).await;
        let reply = widget.messages().last().unwrap();
        assert_eq!(reply.category, Some(Category::Healthcare));
        assert_eq!(reply.tag(), Some(Category::Healthcare));
        assert_eq!(agent.requests()[0].address.as_deref(), Some(PROVIDER));
    }

    #[tokio::test]
    async fn test_disconnected_requests_carry_placeholder() {
        let agent = Arc::new(ScriptedAgent::new(&[Some("ok"), Some("ok"), Some("ok")]));
        let mut widget = ChatWidget::new(agent.clone());

        widget.send("hello", None).await;
        widget.check_balance(None).await;
        widget.submit_intake(None).await;

        let requests = agent.requests();
        assert_eq!(requests.len(), 3);
        assert!(requests
            .iter()
            .all(|r| r.address.as_deref() == Some(WALLET_PLACEHOLDER)));
    }

    #[tokio::test]
    async fn test_offline_agent_produces_error_messages() {
        let agent = Arc::new(ScriptedAgent::offline());
        let mut widget = ChatWidget::new(agent);

        widget.open().await;
        assert_eq!(widget.messages().len(), 1);

        widget.send("hello", None).await;
        assert_eq!(widget.messages().last().unwrap().text, CONNECTION_FAILURE);

        widget.check_balance(None).await;
        let last = widget.messages().last().unwrap();
        assert_eq!(last.text, BALANCE_FAILURE);
        assert_eq!(last.category, Some(Category::Error));
        assert_eq!(last.tag(), None);
    }

    #[tokio::test]
    async fn test_clear_history_resets_both_sides() {
        let agent = Arc::new(ScriptedAgent::new(&[Some("Your appointment is booked")]));
        let mut widget = ChatWidget::new(agent.clone());
        widget.open().await;
        widget.send("Book an appointment", Some(PROVIDER)).await;
        assert_eq!(
            widget.messages().last().unwrap().category,
            Some(Category::Appointment)
        );
        assert_eq!(widget.history().await.unwrap().len(), 1);

        widget.clear_history().await;
        assert_eq!(widget.messages().len(), 1);
        assert_eq!(widget.messages()[0].text, HISTORY_CLEARED);
        assert!(widget.history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_intake_message_lists_every_field() {
        let agent = Arc::new(ScriptedAgent::new(&[Some("Patient PAT-9 created")]));
        let mut widget = ChatWidget::new(agent.clone());
        widget.toggle_intake();
        {
            let form = widget.intake_mut();
            form.patient_id = "PAT-9".to_string();
            form.name = "Eve Adams".to_string();
            form.age = "29".to_string();
            form.gender = "Female".to_string();
            form.contact = "+1-555-0199".to_string();
            form.email = "eve@example.com".to_string();
            form.address = "5 Pine Rd".to_string();
            form.medical_history = "Migraines".to_string();
        }
        widget.submit_intake(Some(PROVIDER)).await;

        let sent = &agent.requests()[0].message;
        assert_eq!(
            sent,
            "Add a new patient with the following details:\nPatient ID: PAT-9\nName: Eve Adams\nAge: 29\nGender: Female\nContact: +1-555-0199\nEmail: eve@example.com\nAddress: 5 Pine Rd\nMedical History: Migraines"
        );
        // reply mentions "created" but intake replies are always healthcare
        assert_eq!(
            widget.messages().last().unwrap().category,
            Some(Category::Healthcare)
        );
        assert!(!widget.show_intake());
    }
}
