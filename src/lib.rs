//! ChatGPT App Template Library
//!
//! This library provides an MCP (Model Context Protocol) server exposing
//! tools and HTML widgets that a chat client renders inline.

// Domain modules
pub mod assets;
pub mod mcp;
pub mod widgets;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
pub mod state;
