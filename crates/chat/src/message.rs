//! Transcript messages and reply classification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Presentation category of a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Greeting,
    Healthcare,
    Wallet,
    Appointment,
    Error,
    Success,
    General,
    System,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Healthcare => "healthcare",
            Category::Wallet => "wallet",
            Category::Appointment => "appointment",
            Category::Error => "error",
            Category::Success => "success",
            Category::General => "general",
            Category::System => "system",
        }
    }

    /// Greeting, error, success and system messages carry no tag
    pub fn is_tagged(&self) -> bool {
        !matches!(
            self,
            Category::Greeting | Category::Error | Category::Success | Category::System
        )
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword groups, checked in order; the first group with a hit wins
const RULES: [(Category, &[&str]); 5] = [
    (Category::Healthcare, &["patient", "record"]),
    (Category::Wallet, &["wallet", "balance", "fund", "transfer"]),
    (Category::Appointment, &["appointment"]),
    (Category::Error, &["error", "sorry"]),
    (Category::Success, &["success", "added", "created"]),
];

/// Categorize a bot reply by case-insensitive substring match
pub fn classify(text: &str) -> Category {
    let lower = text.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::General)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Millisecond timestamp, bumped to stay unique within a transcript
    pub id: i64,
    pub text: String,
    pub is_bot: bool,
    pub category: Option<Category>,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// Tag to render next to a bot message, if any
    pub fn tag(&self) -> Option<Category> {
        if !self.is_bot {
            return None;
        }
        self.category.filter(Category::is_tagged)
    }
}
