//! Error types for asset loading, widget registration and MCP dispatch.

use axum::http::StatusCode;
use thiserror::Error;

/// JSON-RPC 2.0 error codes used by the MCP endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid JSON was received
    ParseError = -32700,
    /// The JSON sent is not a valid Request object
    InvalidRequest = -32600,
    /// The method does not exist / is not available
    MethodNotFound = -32601,
    /// Invalid method parameter(s)
    InvalidParams = -32602,
    /// Internal JSON-RPC error
    InternalError = -32603,
    /// MCP: requested resource does not exist
    ResourceNotFound = -32002,
    /// Transport-level rejection (e.g. wrong HTTP method)
    ServerError = -32000,
}

impl ErrorCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Failure to fetch a text asset from the static-asset backend.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The backend answered with a non-success status.
    #[error("Failed to load {path}: {status}")]
    Fetch { path: String, status: StatusCode },

    /// The response body could not be read.
    #[error("Failed to read body of {path}: {message}")]
    Body { path: String, message: String },

    /// The body is not valid UTF-8 text.
    #[error("Asset {0} is not valid UTF-8")]
    InvalidUtf8(String),

    /// The path cannot be turned into a request URI.
    #[error("Invalid asset path {path}: {message}")]
    InvalidPath { path: String, message: String },
}

/// Errors raised while building the widget registry at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Duplicate widget {field}: {value}")]
    Duplicate { field: &'static str, value: String },

    /// Widget names become asset paths, so they are restricted to `[A-Za-z0-9_-]+`.
    #[error("Invalid widget name: {0:?}")]
    InvalidName(String),
}

/// Errors surfaced to MCP clients as JSON-RPC error objects.
#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error")]
    ParseError,

    #[error("Invalid Request")]
    InvalidRequest,

    #[error("Invalid Request: expected Content-Type: application/json")]
    UnsupportedContentType,

    #[error("Method not found")]
    MethodNotFound(String),

    #[error("{0}")]
    InvalidParams(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error(transparent)]
    Asset(#[from] AssetError),
}

impl McpError {
    /// JSON-RPC code reported for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            McpError::ParseError => ErrorCode::ParseError,
            McpError::InvalidRequest | McpError::UnsupportedContentType => {
                ErrorCode::InvalidRequest
            }
            McpError::MethodNotFound(_) => ErrorCode::MethodNotFound,
            McpError::InvalidParams(_) | McpError::UnknownTool(_) => ErrorCode::InvalidParams,
            McpError::ResourceNotFound(_) => ErrorCode::ResourceNotFound,
            McpError::Asset(_) => ErrorCode::InternalError,
        }
    }

    /// Shorthand for a tool argument that failed to deserialize.
    pub fn invalid_arguments(err: impl std::fmt::Display) -> Self {
        McpError::InvalidParams(format!("Invalid arguments: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_carries_path_and_status() {
        let err = AssetError::Fetch {
            path: "/globals.css".into(),
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "Failed to load /globals.css: 404 Not Found");
    }

    #[test]
    fn asset_errors_map_to_internal_error() {
        let err: McpError = AssetError::InvalidUtf8("/x.js".into()).into();
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.code().as_i32(), -32603);
    }

    #[test]
    fn unknown_tool_is_invalid_params() {
        let err = McpError::UnknownTool("nope".into());
        assert_eq!(err.code().as_i32(), -32602);
        assert_eq!(err.to_string(), "Unknown tool: nope");
    }
}
