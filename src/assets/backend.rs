//! Static-asset backends
//!
//! An [`AssetBackend`] answers plain HTTP requests for build outputs. Two
//! implementations are provided: [`DirAssets`] serves a directory on disk and
//! [`MemoryAssets`] serves a fixed in-memory table.

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::Request,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// A fetch-capable static-asset backend.
///
/// Responses are returned untouched; callers decide what a non-success
/// status means.
#[async_trait]
pub trait AssetBackend: Send + Sync {
    async fn fetch(&self, request: Request) -> Response;
}

// =============================================================================
// Directory backend
// =============================================================================

/// Serves files from a build output directory.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
    service: ServeDir,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let service = ServeDir::new(&root);
        Self { root, service }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl AssetBackend for DirAssets {
    async fn fetch(&self, request: Request) -> Response {
        match self.service.clone().oneshot(request).await {
            Ok(response) => response.map(Body::new),
            Err(never) => match never {},
        }
    }
}

// =============================================================================
// In-memory backend
// =============================================================================

/// Serves a fixed set of text files keyed by absolute path (`/globals.css`).
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    files: HashMap<String, String>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

#[async_trait]
impl AssetBackend for MemoryAssets {
    async fn fetch(&self, request: Request) -> Response {
        if request.method() != Method::GET && request.method() != Method::HEAD {
            return StatusCode::METHOD_NOT_ALLOWED.into_response();
        }

        let path = request.uri().path();
        match self.files.get(path) {
            Some(content) => {
                let mime = mime_guess::from_path(path).first_or_octet_stream();
                (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, mime.as_ref())],
                    content.clone(),
                )
                    .into_response()
            }
            None => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(path: &str) -> Request {
        Request::get(path).body(Body::empty()).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn memory_backend_serves_known_paths() {
        let assets = MemoryAssets::new().with("/globals.css", "body{}");

        let response = assets.fetch(get("/globals.css")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
        assert_eq!(body_text(response).await, "body{}");
    }

    #[tokio::test]
    async fn memory_backend_404s_unknown_paths() {
        let assets = MemoryAssets::new();
        let response = assets.fetch(get("/missing.js")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn memory_backend_rejects_writes() {
        let assets = MemoryAssets::new().with("/a.js", "x");
        let request = Request::post("/a.js").body(Body::empty()).unwrap();
        let response = assets.fetch(request).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn memory_and_dir_backends_agree_on_content_type() {
        let names = ["logo.svg", "icon.png", "app.wasm", "globals.css", "data.json", "blob.unknownext"];
        let dir = tempfile::tempdir().unwrap();
        let mut memory = MemoryAssets::new();
        for name in names {
            std::fs::write(dir.path().join(name), "x").unwrap();
            memory.insert(format!("/{name}"), "x");
        }
        let disk = DirAssets::new(dir.path());

        for name in names {
            let path = format!("/{name}");
            let from_disk = disk.fetch(get(&path)).await;
            let from_memory = memory.fetch(get(&path)).await;
            assert_eq!(
                from_memory.headers()[header::CONTENT_TYPE],
                from_disk.headers()[header::CONTENT_TYPE],
                "{path}"
            );
        }

        let svg = memory.fetch(get("/logo.svg")).await;
        assert_eq!(svg.headers()[header::CONTENT_TYPE], "image/svg+xml");
    }

    #[tokio::test]
    async fn dir_backend_serves_files_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("testbench.js"), "console.log(1)").unwrap();

        let assets = DirAssets::new(dir.path());
        assert_eq!(assets.root(), dir.path());

        let response = assets.fetch(get("/testbench.js")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "console.log(1)");

        let missing = assets.fetch(get("/nope.css")).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn dir_backend_does_not_escape_root() {
        let parent = tempfile::tempdir().unwrap();
        let root = parent.path().join("public");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(parent.path().join("secret.txt"), "hidden").unwrap();

        let assets = DirAssets::new(&root);
        let response = assets.fetch(get("/../secret.txt")).await;
        assert_ne!(response.status(), StatusCode::OK);
    }
}
