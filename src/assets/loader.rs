//! Text asset loading
//!
//! One attempt per path: no retries, no timeout, no caching. A widget's
//! three files are requested concurrently and the first failure aborts the
//! whole load.

use super::backend::AssetBackend;
use crate::error::AssetError;
use axum::{body::Body, extract::Request};
use futures_util::future::try_join3;

/// Stylesheet shared by every widget.
pub const GLOBAL_STYLES_PATH: &str = "/globals.css";

/// The three build outputs a widget document is assembled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetAssets {
    pub global_styles: String,
    pub widget_styles: String,
    pub widget_script: String,
}

/// Fetches `path` from the backend and returns its body as text.
///
/// Any non-2xx status is an [`AssetError::Fetch`] carrying the path and status.
pub async fn load_asset_text(backend: &dyn AssetBackend, path: &str) -> Result<String, AssetError> {
    let request = Request::get(path)
        .body(Body::empty())
        .map_err(|e| AssetError::InvalidPath {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    let response = backend.fetch(request).await;
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(path, %status, "asset fetch failed");
        return Err(AssetError::Fetch {
            path: path.to_string(),
            status,
        });
    }

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .map_err(|e| AssetError::Body {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    tracing::debug!(path, bytes = bytes.len(), "asset loaded");

    String::from_utf8(bytes.to_vec()).map_err(|_| AssetError::InvalidUtf8(path.to_string()))
}

/// Loads `/globals.css`, `/<widget_name>.css` and `/<widget_name>.js`.
pub async fn load_widget_assets(
    backend: &dyn AssetBackend,
    widget_name: &str,
) -> Result<WidgetAssets, AssetError> {
    let styles_path = format!("/{}.css", widget_name);
    let script_path = format!("/{}.js", widget_name);

    let (global_styles, widget_styles, widget_script) = try_join3(
        load_asset_text(backend, GLOBAL_STYLES_PATH),
        load_asset_text(backend, &styles_path),
        load_asset_text(backend, &script_path),
    )
    .await?;

    Ok(WidgetAssets {
        global_styles,
        widget_styles,
        widget_script,
    })
}
