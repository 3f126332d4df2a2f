// src/services/conversation.rs
use tracing::info;

use super::chat_client::ChatClient;
use crate::{error::Result, message::ChatResponse};

/// One chat session as seen from the client: remembers the id the backend hands back.
#[derive(Debug, Clone)]
pub struct Conversation {
    client: ChatClient,
    session_id: Option<String>,
}

impl Conversation {
    pub fn new(client: ChatClient) -> Self {
        Self { client, session_id: None }
    }

    pub fn resume(client: ChatClient, session_id: impl Into<String>) -> Self {
        Self { client, session_id: Some(session_id.into()) }
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn client(&self) -> &ChatClient {
        &self.client
    }

    pub async fn send(&mut self, message: &str) -> Result<ChatResponse> {
        let response = self
            .client
            .send_message(self.session_id.as_deref(), message)
            .await?;

        // Keep the current id if the backend didn't echo one.
        if let Some(id) = &response.session_id {
            if self.session_id.as_deref() != Some(id.as_str()) {
                info!(session_id = %id, "conversation bound to session");
                self.session_id = Some(id.clone());
            }
        }

        Ok(response)
    }

    /// Forget the session; the next `send` asks the backend for a new one.
    pub fn reset(&mut self) {
        self.session_id = None;
    }
}
