use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Request logging middleware.
///
/// Emits one structured `api_request` event per invocation, including
/// preflights answered by the CORS layer. The Lambda request id is
/// attached when the runtime provided one.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().path().to_string();
    let request_id = req
        .extensions()
        .get::<lambda_http::Context>()
        .map(|ctx| ctx.request_id.clone())
        .unwrap_or_default();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    tracing::info!(
        method = %method,
        path = %uri,
        status = status,
        request_id = %request_id,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "api_request"
    );

    response
}
