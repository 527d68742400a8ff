//! Healthcare Agent Chat
//!
//! Client side of the natural-language assistant: a transcript of user
//! and bot messages, a patient intake form that is serialized into a
//! chat message, and the HTTP contract of the agent service.
//!
//! The widget never touches chain state. It only forwards text, plus the
//! wallet address when one is connected.

pub mod backend;
pub mod error;
pub mod intake;
pub mod message;
pub mod widget;

pub use backend::{ChatBackend, ChatReply, ChatRequest, HealthStatus, HistoryEntry, HttpChatBackend};
pub use error::ChatError;
pub use intake::PatientIntakeForm;
pub use message::{classify, Category, Message};
pub use widget::ChatWidget;

/// Agent service address when none is configured
pub const DEFAULT_CHAT_URL: &str = "http://127.0.0.1:8000";

/// Sent in place of an address while no wallet is connected
pub const WALLET_PLACEHOLDER: &str = "Request wallet connection";
