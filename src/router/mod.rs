//! Routing module for the ChatGPT app
//!
//! `/mcp` is the only dynamic route. Every other request is handed to the
//! static-asset backend unmodified and its response is returned as is.

use crate::state::SharedState;
use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        tracing::info!(%method, %uri, "request");
        let res = next.run(req).await;
        if !res.status().is_success() {
            tracing::warn!(%method, %uri, status = %res.status(), "request failed");
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .merge(crate::mcp::routes())
        .fallback(serve_asset)
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}

/// Fallback: pass the request through to the asset backend.
async fn serve_asset(State(state): State<SharedState>, request: Request) -> Response {
    state.assets.fetch(request).await
}
