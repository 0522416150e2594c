//! HTTP client for the generation service.
//!
//! One attempt per call, bounded by a client-wide timeout. The timeout is
//! kept below the Lambda deadline so a hung backend surfaces as a
//! [`GenerateError::Timeout`] instead of the runtime killing the function.

use std::error::Error as _;
use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use parley_core::models::generation::{GenerationRequest, GenerationResult};

use crate::error::GenerateError;

/// Upper bound on a single generation call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

const GENERATE_PATH: &str = "/generate";

/// Handle to the generation service. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

/// Shape of the `/generate` response body. Anything beyond
/// `generated_text` is ignored.
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    generated_text: Option<String>,
}

impl GenerationClient {
    /// Build a client for the service rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, GenerateError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, GenerateError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("parley/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GenerateError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!("{}{GENERATE_PATH}", base_url.trim_end_matches('/')),
            timeout,
        })
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one prompt to the service and return the generated text.
    ///
    /// Non-2xx responses become [`GenerateError::Http`] carrying the status
    /// and body. A 2xx body that is not JSON, or lacks a non-empty
    /// `generated_text`, becomes [`GenerateError::Format`].
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerateError> {
        let payload = serde_json::to_vec(request)?;

        info!(
            url = %self.endpoint,
            payload_bytes = payload.len(),
            "sending generation request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), body = %body, "generation service returned an error");
            return Err(GenerateError::Http {
                status: status.as_u16(),
                body,
            });
        }

        info!(status = status.as_u16(), "generation response received");

        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| GenerateError::Format(format!("{e}. Response: {body}")))?;

        match parsed.generated_text {
            Some(text) if !text.is_empty() => Ok(GenerationResult {
                generated_text: text,
            }),
            _ => {
                warn!(body = %body, "generated_text missing from generation response");
                Err(GenerateError::Format(format!(
                    "'generated_text' not found in {body}"
                )))
            }
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> GenerateError {
        if e.is_timeout() {
            return GenerateError::Timeout(self.timeout);
        }

        // reqwest's Display stops at "error sending request"; the cause
        // (connection refused, DNS failure) lives further down the chain.
        let mut reason = e.to_string();
        let mut source = e.source();
        while let Some(cause) = source {
            reason.push_str(": ");
            reason.push_str(&cause.to_string());
            source = cause.source();
        }
        GenerateError::Transport(reason)
    }
}
