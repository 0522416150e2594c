//! parley-lambda
//!
//! API Gateway → Lambda adapter that relays chat messages to the
//! generation service.

use axum::middleware as axum_mw;
use axum::Router;
use tower::ServiceBuilder;

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use middleware::headers;
use state::AppState;

/// Build the router served by `lambda_http`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .fallback(routes::chat::chat)
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::audit::audit_log))
                .layer(headers::allow_origin())
                .layer(headers::allow_headers())
                .layer(headers::allow_methods())
                .layer(headers::json_content_type())
                .layer(headers::preflight()),
        )
        .with_state(state)
}
