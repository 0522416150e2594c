use std::env;

/// Environment variable holding the generation service base URL.
pub const GENERATION_API_URL: &str = "GENERATION_API_URL";

/// Process-wide settings, read once at cold start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the generation service, without a trailing `/`.
    /// `None` when the variable is unset or blank.
    pub generation_api_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Used by `from_env` and tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let generation_api_url = lookup(GENERATION_API_URL)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Self { generation_api_url }
    }
}
