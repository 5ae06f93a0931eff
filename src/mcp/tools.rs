//! Tool definitions
//!
//! Tools are a static table. Arguments are deserialized into the tool's
//! input type before its handler runs, so handlers only see well-formed input.

use super::{helpers::*, models::*};
use crate::error::McpError;
use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Handler invoked with the raw `arguments` of a `tools/call`.
pub type ToolHandler = fn(Value) -> Result<Value, McpError>;

/// A tool as published by `tools/list`.
pub struct ToolDefinition {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
    pub meta: Value,
    pub handler: ToolHandler,
}

impl ToolDefinition {
    /// Descriptor for `tools/list`.
    pub fn descriptor(&self) -> Value {
        json!({
            "name": self.name,
            "title": self.title,
            "description": self.description,
            "inputSchema": self.input_schema,
            "_meta": self.meta,
        })
    }
}

/// Tools served by this app.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: RESERVATION_CARD_TOOL,
            title: "Show Reservation Card",
            description: "Displays a reservation card for the given reservation.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "reservationId": { "type": "string" }
                },
                "required": ["reservationId"]
            }),
            meta: widget_meta(
                RESERVATION_CARD_URI,
                "Preparing the reservation card...",
                "Reservation card ready.",
            ),
            handler: reservation_card,
        },
        ToolDefinition {
            name: SHOW_TESTBENCH_TOOL,
            title: "Show API Testbench",
            description: "Opens an interactive testbench for the window.openai API.",
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
            meta: widget_meta(
                TESTBENCH_URI,
                "Opening the API testbench...",
                "API testbench ready.",
            ),
            handler: show_testbench,
        },
        ToolDefinition {
            name: ECHO_TOOL,
            title: "Echo",
            description: "Echoes the given message back with a timestamp.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "message": { "type": "string" }
                },
                "required": ["message"]
            }),
            // Callable from inside the testbench widget.
            meta: json!({ "openai/widgetAccessible": true }),
            handler: echo,
        },
    ]
}

/// Registered tools, looked up by name.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    pub fn from_definitions(tools: Vec<ToolDefinition>) -> Self {
        Self { tools }
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn list(&self) -> Vec<Value> {
        self.tools.iter().map(ToolDefinition::descriptor).collect()
    }

    /// Handles `tools/call` (Business Logic).
    pub fn call(&self, name: &str, args: Value) -> Result<Value, McpError> {
        let tool = self
            .get(name)
            .ok_or_else(|| McpError::UnknownTool(name.to_string()))?;
        (tool.handler)(args)
    }
}

/// Deserializes tool arguments; a missing `arguments` counts as `{}`.
fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, McpError> {
    let args = match args {
        Value::Null => json!({}),
        other => other,
    };
    serde_json::from_value(args).map_err(McpError::invalid_arguments)
}

fn reservation_card(args: Value) -> Result<Value, McpError> {
    let input: ReservationCardInput = parse_args(args)?;

    let mut result = text_result(format!("Showing reservation {}", input.reservation_id));
    result["structuredContent"] = json!({ "reservationId": input.reservation_id });
    Ok(result)
}

fn show_testbench(args: Value) -> Result<Value, McpError> {
    let _: ShowTestbenchInput = parse_args(args)?;
    Ok(text_result("Opening the API testbench."))
}

fn echo(args: Value) -> Result<Value, McpError> {
    let input: EchoInput = parse_args(args)?;

    let mut result = text_result(format!("Echo: {}", input.message));
    result["structuredContent"] = json!({
        "echoed": input.message,
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    });
    Ok(result)
}
