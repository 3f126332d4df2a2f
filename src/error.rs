// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend answered with a non-success status. Nothing else is kept.
    #[error("Failed to send message")]
    RequestFailed,

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("health check failed with status {status}")]
    HealthCheckFailed { status: u16 },
}
