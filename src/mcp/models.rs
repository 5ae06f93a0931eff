//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Tool rendering the reservation card widget
pub const RESERVATION_CARD_TOOL: &str = "reservation-card";
/// Tool opening the API testbench widget
pub const SHOW_TESTBENCH_TOOL: &str = "show-testbench";
/// Tool echoing its input back
pub const ECHO_TOOL: &str = "echo";
/// URI of the reservation card widget
pub const RESERVATION_CARD_URI: &str = "ui://widget/reservation-card.html";
/// URI of the testbench widget
pub const TESTBENCH_URI: &str = "ui://widget/testbench.html";
/// MIME type for widget documents
pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";
/// Server identifier
pub const SERVER_NAME: &str = "ChatGPT App Template";
/// Server version reported in `initialize`
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Protocol version answered when the client asks for one we do not know
pub const LATEST_PROTOCOL_VERSION: &str = "2025-06-18";
/// Protocol versions this server can speak
pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] = &["2025-06-18", "2025-03-26", "2024-11-05"];

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier. `None` only when the member is absent (a
    /// notification); an explicit `null` is `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Value>,
}

/// Marks a member as present, whatever its value, including `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Input for the reservation-card tool
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCardInput {
    pub reservation_id: String,
}

/// Input for the show-testbench tool (no fields)
#[derive(Debug, Default, Deserialize)]
pub struct ShowTestbenchInput {}

/// Input for the echo tool
#[derive(Debug, Deserialize)]
pub struct EchoInput {
    pub message: String,
}
