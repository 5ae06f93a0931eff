//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication
//! and OpenAI widget metadata construction.

use crate::error::McpError;
use serde_json::{json, Value};

/// Constructs the tool metadata the OpenAI widget system reads.
///
/// # Arguments
///
/// * `output_template` - URI of the widget rendering the tool result.
/// * `invoking` / `invoked` - Status lines shown while and after the tool runs.
pub fn widget_meta(output_template: &str, invoking: &str, invoked: &str) -> Value {
    json!({
        "openai/outputTemplate": output_template,
        "openai/toolInvocation/invoking": invoking,
        "openai/toolInvocation/invoked": invoked,
    })
}

/// Builds a text-only tool result.
pub fn text_result(text: impl Into<String>) -> Value {
    json!({
        "content": [{ "type": "text", "text": text.into() }]
    })
}

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC success envelope.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC error envelope.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// JSON-RPC error envelope for an [`McpError`].
pub fn mcp_error_response(id: Value, err: &McpError) -> Value {
    rpc_error(id, err.code().as_i32(), err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_envelopes() {
        let success = rpc_success(json!(1), json!("ok"));
        assert_eq!(success["result"], "ok");
        assert_eq!(success["id"], 1);

        let error = rpc_error(json!(2), -1, "fail");
        assert_eq!(error["error"]["message"], "fail");
        assert_eq!(error["id"], 2);
    }

    #[test]
    fn test_mcp_error_envelope() {
        let err = McpError::MethodNotFound("x/y".into());
        let envelope = mcp_error_response(json!("abc"), &err);
        assert_eq!(envelope["id"], "abc");
        assert_eq!(envelope["error"]["code"], -32601);
        assert_eq!(envelope["error"]["message"], "Method not found");
    }
}
