// src/config.rs
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/chat";
pub const ENDPOINT_ENV: &str = "CHAT_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_string() }
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    /// Reads `CHAT_API_URL` (after loading `.env`, if any), else the local default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        match std::env::var(ENDPOINT_ENV) {
            Ok(endpoint) if !endpoint.trim().is_empty() => Self::new(endpoint.trim()),
            _ => Self::default(),
        }
    }
}
