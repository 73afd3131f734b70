// ABOUTME: Server assembly for the tagboard binary
// ABOUTME: Wires configuration, the SQLite pool and the tag handler into a layered axum app

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span};

use tagboard_api::{create_app, TagHandler};
use tagboard_config::Config;
use tagboard_storage::{init_pool, StorageConfig};
use tagboard_tags::SqliteTagStorage;

/// CORS policy: the configured origin, or any origin when none is set
pub fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    match &config.cors_origin {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))?;
            Ok(cors.allow_origin(origin))
        }
        None => Ok(cors.allow_origin(Any)),
    }
}

/// Open storage and build the full application router
pub async fn build_app(config: &Config) -> Result<Router> {
    let storage_config =
        StorageConfig::new(config.database_url.clone(), config.db_max_connections);
    let pool = init_pool(&storage_config)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    let store = Arc::new(SqliteTagStorage::new(pool));
    let handler = TagHandler::new(store, config.page_size, info_span!("tags"));

    Ok(create_app(handler)
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http()))
}

/// Bind and serve until Ctrl-C
pub async fn run_server(config: Config) -> Result<()> {
    let app = build_app(&config).await?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
