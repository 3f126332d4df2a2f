// src/services/chat_client.rs
use reqwest::Client as HttpClient;
use tracing::{debug, warn};
use url::Url;

use crate::{
    config::ClientConfig,
    error::{ClientError, Result},
    message::{ChatRequest, ChatResponse, HealthStatus},
};

/// HTTP client for the chat backend.
///
/// One POST per `send_message` call. Idle connections are not kept, so no
/// state carries over between calls, and no timeout is set.
#[derive(Debug, Clone)]
pub struct ChatClient {
    config: ClientConfig,
    http: HttpClient,
}

impl ChatClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::builder().pool_max_idle_per_host(0).build()?;
        Ok(Self { config, http })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Post `message` (with `session_id`, or `null` to open a new session) and
    /// return whatever the backend replied.
    pub async fn send_message(&self, session_id: Option<&str>, message: &str) -> Result<ChatResponse> {
        let request = ChatRequest { session_id, message };
        debug!(endpoint = %self.config.endpoint, session_id = ?session_id, "sending chat message");

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "chat backend rejected message");
            return Err(ClientError::RequestFailed);
        }

        Ok(response.json().await?)
    }

    /// `GET /health` on the endpoint's origin.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = Url::parse(&self.config.endpoint)?.join("/health")?;
        debug!(%url, "checking backend health");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::HealthCheckFailed { status: status.as_u16() });
        }

        Ok(response.json().await?)
    }
}

/// Send one message to the default local endpoint.
pub async fn send_message(session_id: Option<&str>, message: &str) -> Result<ChatResponse> {
    ChatClient::new(ClientConfig::default())?
        .send_message(session_id, message)
        .await
}
