// API Server Binary Entry Point
//
// Purpose: Start the Axum API server over the plant recommender
// Usage: cargo run --features api --bin api_server

use plant_recommender::config::ServerConfig;
use plant_recommender::{create_router, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "plant_recommender=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = ServerConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  DATA_DIR: {}", config.data_dir.display());
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  DEFAULT_LIMIT: {} (max {})", config.default_limit, config.max_limit);
    tracing::info!("  PROVIDER_TIMEOUT_MS: {}", config.provider_timeout_ms);
    tracing::info!("  CACHE_TTL_SECS: {}", config.cache_ttl_secs);

    let port = config.port;

    // No external provider is wired in: AI suggestions come from the local engine
    let state = AppState::new(config).await?;
    tracing::info!("Application state initialized successfully");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
