//! Widget registry
//!
//! Binds each [`WidgetConfig`] to an MCP resource. Reading a resource loads
//! the widget's assets through the request's backend, assembles the HTML
//! document and attaches the display hints from the config.

use super::{
    config::{WidgetConfig, WidgetMeta},
    html::generate_widget_html,
};
use crate::{
    assets::load_widget_assets,
    error::{McpError, WidgetError},
    mcp::models::WIDGET_MIME_TYPE,
    state::RequestContext,
};
use serde_json::{json, Map, Value};

/// Resources exposed over MCP, one per widget, in registration order.
#[derive(Debug, Clone, Default)]
pub struct WidgetRegistry {
    widgets: Vec<WidgetConfig>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every config in order, stopping at the first invalid one.
    pub fn from_configs(
        configs: impl IntoIterator<Item = WidgetConfig>,
    ) -> Result<Self, WidgetError> {
        let mut registry = Self::new();
        for config in configs {
            registry.register(config)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, config: WidgetConfig) -> Result<(), WidgetError> {
        if !is_valid_widget_name(&config.name) {
            return Err(WidgetError::InvalidName(config.name));
        }
        if self.widgets.iter().any(|w| w.name == config.name) {
            return Err(WidgetError::Duplicate {
                field: "name",
                value: config.name,
            });
        }
        if self.widgets.iter().any(|w| w.uri == config.uri) {
            return Err(WidgetError::Duplicate {
                field: "uri",
                value: config.uri,
            });
        }

        tracing::debug!(name = %config.name, uri = %config.uri, "registered widget");
        self.widgets.push(config);
        Ok(())
    }

    pub fn get(&self, uri: &str) -> Option<&WidgetConfig> {
        self.widgets.iter().find(|w| w.uri == uri)
    }

    /// Descriptors for `resources/list`.
    pub fn list(&self) -> Vec<Value> {
        self.widgets
            .iter()
            .map(|w| {
                json!({
                    "name": format!("{}-widget", w.name),
                    "uri": w.uri,
                    "title": w.title,
                    "description": w.description,
                    "mimeType": WIDGET_MIME_TYPE,
                })
            })
            .collect()
    }

    /// Handles `resources/read` for `uri`.
    ///
    /// Fails without producing any HTML if one of the widget's assets cannot
    /// be loaded.
    pub async fn read(&self, ctx: &RequestContext<'_>, uri: &str) -> Result<Value, McpError> {
        let config = self
            .get(uri)
            .ok_or_else(|| McpError::ResourceNotFound(uri.to_string()))?;

        let assets = load_widget_assets(ctx.assets, &config.name).await?;
        let html = generate_widget_html(config, &assets);

        Ok(json!({
            "contents": [{
                "uri": config.uri,
                "mimeType": WIDGET_MIME_TYPE,
                "text": html,
                "_meta": resource_meta(config.meta.as_ref()),
            }]
        }))
    }
}

/// `openai/*` display hints copied from the widget config; unset hints are omitted.
fn resource_meta(meta: Option<&WidgetMeta>) -> Value {
    let mut out = Map::new();
    if let Some(meta) = meta {
        if let Some(prefers_border) = meta.prefers_border {
            out.insert("openai/widgetPrefersBorder".into(), json!(prefers_border));
        }
        if let Some(domain) = &meta.domain {
            out.insert("openai/widgetDomain".into(), json!(domain));
        }
        if let Some(csp) = &meta.csp {
            out.insert("openai/widgetCSP".into(), json!(csp));
        }
    }
    Value::Object(out)
}

fn is_valid_widget_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
