pub mod config;
pub mod error;
pub mod message;
pub mod services;

pub use config::ClientConfig;
pub use error::ClientError;
pub use message::{ChatResponse, HealthStatus};
pub use services::chat_client::{ChatClient, send_message};
pub use services::conversation::Conversation;
