use chatgpt_app_template::assets::DirAssets;
use chatgpt_app_template::config::ServerConfig;
use chatgpt_app_template::router::create_app_router;
use chatgpt_app_template::state::AppState;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize application state
    let assets_dir = config.resolve_assets_dir();
    tracing::info!(assets_dir = %assets_dir.display(), "Using assets directory");
    let state = Arc::new(AppState::new(Arc::new(DirAssets::new(assets_dir)))?);

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Start the server
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
