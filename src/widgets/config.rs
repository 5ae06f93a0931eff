//! Widget configuration table
//!
//! Every widget the server exposes is declared here. The registry consumes
//! this list once at startup.

use serde::Serialize;

/// Content-security-policy domain lists forwarded to the chat client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WidgetCsp {
    pub connect_domains: Vec<String>,
    pub resource_domains: Vec<String>,
}

/// Optional display hints for a widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetMeta {
    pub prefers_border: Option<bool>,
    pub domain: Option<String>,
    pub csp: Option<WidgetCsp>,
}

/// A widget served as an MCP resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Asset basename: `/<name>.css` and `/<name>.js`.
    pub name: String,
    pub uri: String,
    pub title: String,
    pub description: String,
    /// Id of the element the widget script mounts into.
    pub root_element_id: String,
    pub meta: Option<WidgetMeta>,
}

/// Widgets served by this app.
pub fn widget_configs() -> Vec<WidgetConfig> {
    vec![
        WidgetConfig {
            name: "reservation-card".into(),
            uri: "ui://widget/reservation-card.html".into(),
            title: "Reservation Card Widget".into(),
            description: "Reservation card UI widget for ChatGPT".into(),
            root_element_id: "reservation-root".into(),
            meta: Some(WidgetMeta {
                prefers_border: Some(true),
                ..Default::default()
            }),
        },
        WidgetConfig {
            name: "testbench".into(),
            uri: "ui://widget/testbench.html".into(),
            title: "API Testbench Widget".into(),
            description: "Interactive testbench for window.openai API".into(),
            root_element_id: "testbench-root".into(),
            meta: Some(WidgetMeta {
                prefers_border: Some(true),
                ..Default::default()
            }),
        },
    ]
}
