use std::sync::Arc;

use anyhow::Context;
use pizza_order_rust::config::ServerConfig;
use pizza_order_rust::router::create_app_router;
use pizza_order_rust::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pizza_order_rust=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Initialize application state
    let state = Arc::new(AppState::from_config(&config).context("failed to load catalog")?);
    tracing::info!(
        store = %state.catalog.store().name,
        confirm_mode = ?config.confirm_mode,
        "catalog loaded"
    );

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
