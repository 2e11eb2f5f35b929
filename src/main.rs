//! Pagemill HTTP server entry point
//!
//! Starts the REST API server for the Pagemill chunking service.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagemill::core::config::Config;
use pagemill::core::services::Services;
use pagemill::core::xdg::{migrate_legacy_paths, XdgDirs};
use pagemill::http::{self, middleware as http_middleware};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pagemill=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pagemill chunking service");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.log_paths();

    // Ensure XDG directories exist
    xdg.ensure_dirs_exist()?;

    // Run migration from legacy paths (if needed)
    if let Err(e) = migrate_legacy_paths(&xdg) {
        tracing::warn!("Migration warning: {}", e);
        tracing::info!("Continuing with current paths...");
    }

    // Load configuration
    let config = Config::load()?;

    // Log configuration details
    config.log_config();

    // Create shared services
    let services = Arc::new(Services::new(config.clone())?);

    // API v1 endpoints sit behind the shared-secret check; the
    // health endpoint stays open for probes
    let api = Router::new()
        .route("/api/v1/chunk", post(http::chunk_handler))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&services),
            http_middleware::require_shared_secret,
        ));

    // Build the API router
    let app = Router::new()
        // Health check endpoint
        .route("/health", get(http::health_handler))
        .merge(api)
        // Add middleware
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(CorsLayer::permissive())
        // Add shared state
        .with_state(services);

    // Bind to address and start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    // Serve the application
    axum::serve(listener, app).await?;

    Ok(())
}
