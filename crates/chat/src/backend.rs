//! Agent service contract and its HTTP client

use crate::error::ChatError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// `GET /health`; every field is optional
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
    /// Wallet the agent itself signs with, if any
    #[serde(default)]
    pub wallet_address: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: String,
    pub content: String,
}

#[derive(Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    history: Vec<HistoryEntry>,
}

#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn health(&self) -> Result<HealthStatus, ChatError>;

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ChatError>;

    /// The acknowledgement body is ignored
    async fn clear_history(&self) -> Result<(), ChatError>;

    async fn history(&self) -> Result<Vec<HistoryEntry>, ChatError>;
}

pub struct HttpChatBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpChatBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ChatError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn health(&self) -> Result<HealthStatus, ChatError> {
        let resp = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        debug!(address = ?request.address, "chat request");
        let resp = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(request)
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn clear_history(&self) -> Result<(), ChatError> {
        let resp = self
            .client
            .post(format!("{}/clear-history", self.base_url))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ChatError::Status {
                status: resp.status().as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, ChatError> {
        let resp = self
            .client
            .get(format!("{}/history", self.base_url))
            .send()
            .await?;
        let body: HistoryResponse = Self::decode(resp).await?;
        Ok(body.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_url_trailing_slash() {
        let backend = HttpChatBackend::new("http://127.0.0.1:8000/");
        assert_eq!(backend.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_request_carries_address() {
        let request = ChatRequest {
            message: "List my patients".to_string(),
            address: Some("0x1".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "message": "List my patients", "address": "0x1" })
        );
    }

    #[test]
    fn test_health_fields_optional() {
        let health: HealthStatus = serde_json::from_value(json!({})).unwrap();
        assert_eq!(health, HealthStatus::default());

        let health: HealthStatus =
            serde_json::from_value(json!({ "status": "ok", "wallet_address": "0xabc" })).unwrap();
        assert_eq!(health.wallet_address.as_deref(), Some("0xabc"));
    }

    #[test]
    fn test_history_defaults_to_empty() {
        let body: HistoryResponse = serde_json::from_value(json!({})).unwrap();
        assert!(body.history.is_empty());

        let body: HistoryResponse = serde_json::from_value(json!({
            "history": [{ "role": "user", "content": "hi" }]
        }))
        .unwrap();
        assert_eq!(body.history[0].role, "user");
    }
}
