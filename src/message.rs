// src/message.rs
use serde::{Deserialize, Serialize};

/// Body posted to the chat endpoint. `session_id` is always sent, as `null` when absent.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub session_id: Option<&'a str>,
    pub message: &'a str,
}

/// Reply from the chat backend, read as-is.
///
/// Every field is optional: a key the server leaves out is `None` here rather
/// than a decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
}

impl ChatResponse {
    pub fn reply_text(&self) -> &str {
        self.reply.as_deref().unwrap_or_default()
    }

    pub fn citations(&self) -> &[String] {
        self.citations.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
