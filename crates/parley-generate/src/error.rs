use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("generation service HTTP error: {status} - {body}")]
    Http { status: u16, body: String },

    #[error("generation service URL error: request timed out after {0:?}")]
    Timeout(Duration),

    #[error("generation service URL error: {0}")]
    Transport(String),

    #[error("invalid response format: {0}")]
    Format(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl GenerateError {
    /// Short, stable name for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerateError::Http { .. } => "downstream_http",
            GenerateError::Timeout(_) | GenerateError::Transport(_) => "downstream_transport",
            GenerateError::Format(_) => "downstream_format",
            GenerateError::Serialization(_) => "serialization",
            GenerateError::ClientBuild(_) => "client_build",
        }
    }
}
