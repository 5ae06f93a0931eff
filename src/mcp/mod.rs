//! Model Context Protocol (MCP) Module
//!
//! This module contains all MCP protocol implementation, including:
//! - Protocol models (JsonRpcRequest, tool inputs, constants)
//! - RPC helpers (success/error responses, widget metadata)
//! - Tool table (reservation-card, show-testbench, echo)
//! - MCP handlers (initialize, tools/*, resources/*)

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod tools;

// Re-export commonly used types and functions
pub use handlers::{dispatch, routes};
pub use tools::{tool_definitions, ToolDefinition, ToolRegistry};
