//! MCP (Model Context Protocol) route handlers
//!
//! Both toolsets share one JSON-RPC dispatcher. `dispatch` is public so tests
//! can drive a [`ToolServer`] without going through HTTP.

use super::{helpers::*, models::*, server::ToolServer};
use crate::state::SharedState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{error, info, warn};

/// POST endpoint of the NFL toolset
pub const NFL_ENDPOINT: &str = "/mcp/nfl";
/// POST endpoint of the weather toolset
pub const WEATHER_ENDPOINT: &str = "/mcp/weather";

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route(
            NFL_ENDPOINT,
            post(handle_nfl_mcp).get(|| handle_mcp_sse(NFL_ENDPOINT)),
        )
        .route(
            "/mcp/nfl/",
            post(handle_nfl_mcp).get(|| handle_mcp_sse(NFL_ENDPOINT)),
        ) // Trailing slash safety
        .route(
            WEATHER_ENDPOINT,
            post(handle_weather_mcp).get(|| handle_mcp_sse(WEATHER_ENDPOINT)),
        )
        .route(
            "/mcp/weather/",
            post(handle_weather_mcp).get(|| handle_mcp_sse(WEATHER_ENDPOINT)),
        )
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse(endpoint: &'static str) -> impl IntoResponse {
    ([("content-type", "text/event-stream")], sse_handshake(endpoint))
}

/// Endpoint: POST /mcp/nfl
async fn handle_nfl_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, JsonRejection>,
) -> Response {
    handle_mcp(&state.nfl_tools, body).await
}

/// Endpoint: POST /mcp/weather
async fn handle_weather_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, JsonRejection>,
) -> Response {
    handle_mcp(&state.weather_tools, body).await
}

async fn handle_mcp(
    server: &dyn ToolServer,
    body: Result<Json<JsonRpcRequest>, JsonRejection>,
) -> Response {
    // Parse JSON-RPC Request (POST)
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            warn!(server = server.server_name(), error = %e.body_text(), "JSON-RPC parse error");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    Json(dispatch(server, req).await).into_response()
}

/// Routes one JSON-RPC request to the matching MCP method.
pub async fn dispatch(server: &dyn ToolServer, req: JsonRpcRequest) -> Value {
    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    info!(server = server.server_name(), method = method_name, id = %id, "MCP call");

    match method_name {
        "initialize" => rpc_success(id, handle_initialize(server)),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, server.tools()),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match server.call_tool(tool_name, args).await {
                Ok(result) => rpc_success(id, result),
                Err(e) => {
                    error!(tool = tool_name, error = %e, "tool call failed");
                    rpc_error(id, e.code(), e.to_string())
                }
            }
        }
        "ping" => rpc_success(id, json!({})),
        _ => {
            warn!(method = method_name, "unknown MCP method");
            rpc_error(id, METHOD_NOT_FOUND, "Method not found")
        }
    }
}

/// Handles `initialize` request (Handshake).
fn handle_initialize(server: &dyn ToolServer) -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": server.server_name(),
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}
