use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http;
use axum::Json;
use lambda_http::request::RequestContext;
use serde::{Deserialize, Serialize};
use tracing::info;

use parley_core::arn::region_from_function_arn;
use parley_core::models::chat::{ChatMessage, ConversationHistory};
use parley_core::models::claims::CallerClaims;
use parley_core::models::generation::GenerationRequest;
use parley_generate::client::GenerationClient;

use crate::error::ChatError;
use crate::state::AppState;

/// Synchronous Lambda invocation payload ceiling.
const MAX_BODY_BYTES: usize = 6 * 1024 * 1024;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    /// `null` and absent are both treated as an empty history.
    #[serde(default)]
    pub conversation_history: Option<ConversationHistory>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub conversation_history: ConversationHistory,
}

/// Handle one chat turn.
///
/// Mounted as the router fallback: API Gateway decides which resource
/// reaches the function, so every path and method lands here except
/// preflights, which the CORS layer answers.
pub async fn chat(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<ChatResponse>, ChatError> {
    if let Some(claims) = caller_claims(&request) {
        info!(
            user = claims.identity().unwrap_or("unknown"),
            claim_count = claims.len(),
            "authenticated user"
        );
    }

    if let Some(ctx) = request.extensions().get::<lambda_http::Context>() {
        info!(
            request_id = %ctx.request_id,
            region = region_from_function_arn(&ctx.invoked_function_arn),
            "received event"
        );
    }

    let body = to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| ChatError::MalformedRequest(e.to_string()))?;
    let chat_request: ChatRequest = serde_json::from_slice(&body)?;

    let response = run_turn(state.generation.as_ref(), chat_request).await?;

    Ok(Json(response))
}

/// Forward the message to the generation service and extend the history.
///
/// On success the returned history is the caller's history followed by the
/// user message and the assistant reply. On failure nothing is returned.
pub async fn run_turn(
    generation: Option<&GenerationClient>,
    request: ChatRequest,
) -> Result<ChatResponse, ChatError> {
    let mut history = request.conversation_history.unwrap_or_default();

    info!(
        message_chars = request.message.chars().count(),
        history_len = history.len(),
        "processing message"
    );

    history.push(ChatMessage::user(request.message.as_str()));
    let generation_request = GenerationRequest::new(request.message);

    let client = generation.ok_or(ChatError::Configuration)?;
    let result = client.generate(&generation_request).await?;

    history.push(ChatMessage::assistant(result.generated_text.as_str()));

    Ok(ChatResponse {
        success: true,
        response: result.generated_text,
        conversation_history: history,
    })
}

/// Claims asserted by the API Gateway authorizer, if any.
///
/// `lambda_http` stores the event's request context as a request
/// extension; requests built outside the runtime have none.
pub fn caller_claims<B>(request: &http::Request<B>) -> Option<CallerClaims> {
    let context = request.extensions().get::<RequestContext>()?;
    let value = serde_json::to_value(context).ok()?;
    CallerClaims::from_request_context(&value)
}
