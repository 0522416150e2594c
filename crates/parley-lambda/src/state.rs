use parley_generate::client::GenerationClient;
use parley_generate::error::GenerateError;

use crate::config::{Config, GENERATION_API_URL};

/// Shared application state, injected into the chat handler via Axum state.
#[derive(Clone, Debug)]
pub struct AppState {
    /// `None` when no base URL is configured; every chat request then
    /// fails with a configuration error without touching the network.
    pub generation: Option<GenerationClient>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, GenerateError> {
        let generation = match config.generation_api_url.as_deref() {
            Some(url) => {
                let client = GenerationClient::new(url)?;
                tracing::info!(endpoint = client.endpoint(), "generation client ready");
                Some(client)
            }
            None => {
                tracing::warn!("{GENERATION_API_URL} environment variable is not set");
                None
            }
        };

        Ok(Self { generation })
    }
}
