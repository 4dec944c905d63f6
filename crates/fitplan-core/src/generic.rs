//! Generic message and response types shared by every backend.
//!
//! They mirror the concepts exposed by most provider APIs (“system”, “user”,
//! “assistant”) and stay small enough to build in unit tests without mocking
//! a transport layer.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single chat message independent of any specific provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub content: String,
    pub role: GenericRole,
}

impl GenericMessage {
    /// Convenience constructor mirroring the field order used by common HTTP
    /// APIs (`role`, then `content`).
    ///
    /// ```rust
    /// use fitplan_core::generic::{GenericMessage, GenericRole};
    ///
    /// let msg = GenericMessage::new("Plan my week.".into(), GenericRole::User);
    /// assert_eq!(msg.role, GenericRole::User);
    /// ```
    pub fn new(content: String, role: GenericRole) -> Self {
        Self { content, role }
    }
}

/// High-level chat roles recognised by most LLM providers.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    System,
    Assistant,
    User,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::Assistant => write!(f, "assistant"),
            GenericRole::User => write!(f, "user"),
        }
    }
}

/// The text a backend produced for one request.
#[derive(Debug, Clone)]
pub struct GenericChatCompletionResponse {
    pub content: String,
    pub finish_reason: Option<String>,
    pub usage: Option<GenericUsageReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}
