use tracing_subscriber::EnvFilter;

use parley_lambda::config::Config;
use parley_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env();
    let state = AppState::from_config(&config)?;

    lambda_http::run(parley_lambda::app(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
