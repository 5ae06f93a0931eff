//! Application State
//!
//! Everything here is built once at startup and never mutated. The asset
//! backend reaches handlers through [`RequestContext`], created per request.

use crate::{
    assets::AssetBackend,
    error::WidgetError,
    mcp::tools::{tool_definitions, ToolRegistry},
    widgets::{widget_configs, WidgetRegistry},
};
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Registered widgets and tools plus the static-asset backend.
pub struct AppState {
    pub assets: Arc<dyn AssetBackend>,
    pub widgets: WidgetRegistry,
    pub tools: ToolRegistry,
}

impl AppState {
    /// Registers the built-in widgets and tools against `assets`.
    pub fn new(assets: Arc<dyn AssetBackend>) -> Result<Self, WidgetError> {
        Ok(Self {
            assets,
            widgets: WidgetRegistry::from_configs(widget_configs())?,
            tools: ToolRegistry::from_definitions(tool_definitions()),
        })
    }

    pub fn context(&self) -> RequestContext<'_> {
        RequestContext::new(self.assets.as_ref())
    }
}

/// Per-request handles passed explicitly to resource handlers.
#[derive(Clone, Copy)]
pub struct RequestContext<'a> {
    pub assets: &'a dyn AssetBackend,
}

impl<'a> RequestContext<'a> {
    pub fn new(assets: &'a dyn AssetBackend) -> Self {
        Self { assets }
    }
}
