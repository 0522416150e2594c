//! Fixed response headers.
//!
//! API Gateway proxy integrations pass the function's headers straight to
//! the browser, so every response (success, failure, preflight) carries
//! the same CORS set.

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum::http::{HeaderName, HeaderValue};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
pub const ALLOW_METHODS: &str = "OPTIONS,POST";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// The four headers present on every response, in a stable order.
pub fn fixed_headers() -> [(HeaderName, &'static str); 4] {
    [
        (ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN),
        (ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS),
        (ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS),
        (CONTENT_TYPE, JSON_CONTENT_TYPE),
    ]
}

/// Answers `OPTIONS` preflight requests before they reach the handler.
pub fn preflight() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn allow_origin() -> SetResponseHeaderLayer<HeaderValue> {
    overriding(ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN)
}

pub fn allow_headers() -> SetResponseHeaderLayer<HeaderValue> {
    overriding(ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS)
}

pub fn allow_methods() -> SetResponseHeaderLayer<HeaderValue> {
    overriding(ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS)
}

pub fn json_content_type() -> SetResponseHeaderLayer<HeaderValue> {
    overriding(CONTENT_TYPE, JSON_CONTENT_TYPE)
}

fn overriding(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}
