use std::collections::HashMap;

use parley_lambda::config::{Config, GENERATION_API_URL};
use parley_lambda::state::AppState;

fn config_from(vars: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn base_url_is_read_and_trailing_slash_trimmed() {
    let config = config_from(&[(GENERATION_API_URL, "https://gen.example.com/")]);
    assert_eq!(
        config.generation_api_url.as_deref(),
        Some("https://gen.example.com")
    );
}

#[test]
fn unset_or_blank_base_url_is_none() {
    assert_eq!(config_from(&[]).generation_api_url, None);
    assert_eq!(config_from(&[(GENERATION_API_URL, "")]).generation_api_url, None);
    assert_eq!(config_from(&[(GENERATION_API_URL, "   ")]).generation_api_url, None);
}

#[test]
fn state_without_base_url_has_no_client() {
    let state = AppState::from_config(&Config::default()).unwrap();
    assert!(state.generation.is_none());
}

#[test]
fn state_with_base_url_targets_generate_endpoint() {
    let config = config_from(&[(GENERATION_API_URL, "http://10.0.0.5:8000")]);
    let state = AppState::from_config(&config).unwrap();
    assert_eq!(
        state.generation.unwrap().endpoint(),
        "http://10.0.0.5:8000/generate"
    );
}
