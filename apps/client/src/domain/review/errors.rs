use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    /// Failure reported by the hosted backend. The payload is the backend's
    /// own message so the UI can surface it verbatim.
    #[error("Backend error: {0}")]
    BackendError(String),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

impl DomainError {
    /// Message shown to the user: the adapter's text when it carries one,
    /// otherwise a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "Not found".into(),
            Self::ValidationError(msg) | Self::BackendError(msg) => msg.clone(),
            Self::InfrastructureError(_) => "Something went wrong, please try again".into(),
        }
    }
}
