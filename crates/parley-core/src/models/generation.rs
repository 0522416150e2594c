use serde::{Deserialize, Serialize};

pub const MAX_NEW_TOKENS: u32 = 512;
pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 0.9;
pub const DO_SAMPLE: bool = true;

/// Payload for `POST /generate` on the generation service.
///
/// Only the prompt varies between calls; the sampling parameters are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub do_sample: bool,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_new_tokens: MAX_NEW_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            do_sample: DO_SAMPLE,
        }
    }
}

/// A successful reply from the generation service.
///
/// `generated_text` is guaranteed non-empty; responses without it are
/// rejected before this type is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub generated_text: String,
}
