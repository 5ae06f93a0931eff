//! Static-asset backend and the text loader built on it.
//!
//! The backend is the one collaborator shared by widget rendering and the
//! router fallback: widgets read `/globals.css`, `/<name>.css` and
//! `/<name>.js` through it, and every non-MCP request is passed to it as is.

pub mod backend;
pub mod loader;

pub use backend::{AssetBackend, DirAssets, MemoryAssets};
pub use loader::{load_asset_text, load_widget_assets, WidgetAssets};
