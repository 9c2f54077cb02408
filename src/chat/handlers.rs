//! REST API handler for the chat relay

use super::models::{SendRequest, SendResponse};
use crate::state::SharedState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::{error, info, warn};

/// Creates routes for chat operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/send", post(send))
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Endpoint: POST /send
/// Relays one user message to the chat service.
async fn send(
    State(state): State<SharedState>,
    body: Result<Json<SendRequest>, JsonRejection>,
) -> Response {
    let payload = match body {
        Ok(Json(p)) => p,
        Err(e) => {
            warn!(error = %e.body_text(), "rejected chat payload");
            return error_response(StatusCode::BAD_REQUEST, "Invalid request body.");
        }
    };

    if payload.request.trim().is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "The 'request' field is required.",
        );
    }

    info!(
        has_thread = payload.thread_id.is_some(),
        chars = payload.request.chars().count(),
        "relaying chat message"
    );

    match state
        .chat_service
        .post_message(&payload.request, payload.thread_id.as_deref())
        .await
    {
        Ok(result) => Json(SendResponse::from(result)).into_response(),
        Err(e) => {
            error!(error = %e, "chat service failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while processing the message.",
            )
        }
    }
}
