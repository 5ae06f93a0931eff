//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the Model Context Protocol endpoint: a single
//! stateless JSON-RPC route at `/mcp`. It exports `dispatch` publicly to
//! make it accessible for tests.

use super::{helpers::*, models::*};
use crate::{error::{ErrorCode, McpError}, state::{AppState, SharedState}};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/mcp", post(handle_mcp).fallback(method_not_allowed))
}

/// Any non-POST method on `/mcp`: no server-initiated stream is offered.
async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(rpc_error(
            Value::Null,
            ErrorCode::ServerError.as_i32(),
            "Method not allowed",
        )),
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, JsonRejection>,
) -> Response {
    // Parse JSON-RPC Request (POST)
    let req = match body {
        Ok(Json(r)) => r,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "rejected MCP request body");
            let (status, err) = match rejection {
                JsonRejection::JsonDataError(_) => {
                    (StatusCode::BAD_REQUEST, McpError::InvalidRequest)
                }
                JsonRejection::MissingJsonContentType(_) => (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    McpError::UnsupportedContentType,
                ),
                _ => (StatusCode::BAD_REQUEST, McpError::ParseError),
            };
            return (status, Json(mcp_error_response(Value::Null, &err))).into_response();
        }
    };

    let params = req.params.unwrap_or(Value::Null);

    // Notifications get no JSON-RPC response.
    let Some(id) = req.id else {
        tracing::debug!(method = %req.method, "MCP notification");
        return StatusCode::ACCEPTED.into_response();
    };

    tracing::info!(method = %req.method, %id, "MCP call");

    let response_body = match dispatch(&state, &req.method, params).await {
        Ok(result) => rpc_success(id, result),
        Err(err) => {
            tracing::warn!(method = %req.method, error = %err, "MCP call failed");
            mcp_error_response(id, &err)
        }
    };

    Json(response_body).into_response()
}

/// Routes one JSON-RPC method to its handler.
pub async fn dispatch(state: &AppState, method: &str, params: Value) -> Result<Value, McpError> {
    match method {
        "initialize" => Ok(handle_initialize(&params)),
        "ping" => Ok(json!({})),
        "notifications/initialized" => Ok(json!({})),
        "tools/list" => Ok(json!({ "tools": state.tools.list() })),
        "tools/call" => {
            let tool_name = params
                .get("name")
                .and_then(|n| n.as_str())
                .ok_or_else(|| McpError::InvalidParams("Missing tool name".into()))?;
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);
            state.tools.call(tool_name, args)
        }
        "resources/list" => Ok(json!({ "resources": state.widgets.list() })),
        "resources/templates/list" => Ok(json!({ "resourceTemplates": [] })),
        "resources/read" => {
            let uri = params
                .get("uri")
                .and_then(|u| u.as_str())
                .ok_or_else(|| McpError::InvalidParams("Missing resource uri".into()))?;
            state.widgets.read(&state.context(), uri).await
        }
        _ => Err(McpError::MethodNotFound(method.to_string())),
    }
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize(params: &Value) -> Value {
    let requested = params.get("protocolVersion").and_then(|v| v.as_str());
    json!({
        "protocolVersion": negotiate_protocol_version(requested),
        "capabilities": {
            "tools": { "listChanged": false },
            "resources": { "listChanged": false, "subscribe": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION
        }
    })
}

/// Echoes a supported client version, otherwise offers the latest one.
fn negotiate_protocol_version(requested: Option<&str>) -> &'static str {
    requested
        .and_then(|v| SUPPORTED_PROTOCOL_VERSIONS.iter().find(|s| **s == v))
        .copied()
        .unwrap_or(LATEST_PROTOCOL_VERSION)
}
