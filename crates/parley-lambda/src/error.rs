use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use parley_generate::error::GenerateError;

/// Everything that can go wrong during a chat turn.
///
/// Every variant maps to the same 500 failure body; the variant only
/// changes the message text and the `kind` field in logs.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("GENERATION_API_URL environment variable is not set")]
    Configuration,

    #[error("invalid request body: {0}")]
    MalformedRequest(String),

    #[error(transparent)]
    Generation(#[from] GenerateError),
}

impl ChatError {
    pub fn kind(&self) -> &'static str {
        match self {
            ChatError::Configuration => "configuration",
            ChatError::MalformedRequest(_) => "malformed_request",
            ChatError::Generation(e) => e.kind(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::error!(kind = self.kind(), error = %message, "chat turn failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::MalformedRequest(e.to_string())
    }
}
