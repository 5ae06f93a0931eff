//! Widget Module
//!
//! Widgets are HTML documents served as MCP resources and rendered inline
//! by the chat client:
//! - Static widget table (WidgetConfig, display hints)
//! - HTML assembly from loaded assets
//! - Registry binding widgets to resource reads

pub mod config;
pub mod html;
pub mod registry;

pub use config::{widget_configs, WidgetConfig, WidgetCsp, WidgetMeta};
pub use html::generate_widget_html;
pub use registry::WidgetRegistry;
