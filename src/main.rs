//! PixShare Server — photo share-link backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use pixshare_core::config::AppConfig;
use pixshare_core::error::AppError;
use pixshare_service::share::{ShareAccessService, ShareLinkService};
use pixshare_store::{DatabasePool, PostgresShareLinkStore, ShareLinkStore};

#[tokio::main]
async fn main() {
    let env = std::env::var("PIXSHARE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting PixShare v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    pixshare_store::migration::run_migrations(db.pool()).await?;

    // ── Step 2: Store and access issuer ──────────────────────────
    let store: Arc<dyn ShareLinkStore> =
        Arc::new(PostgresShareLinkStore::new(db.pool().clone()));
    let issuer = pixshare_storage::from_config(&config.storage).await?;
    tracing::info!(provider = issuer.provider_type(), "Access issuer initialized");

    // ── Step 3: Services ─────────────────────────────────────────
    let share_service = Arc::new(ShareLinkService::new(Arc::clone(&store)));
    let access_service = Arc::new(ShareAccessService::new(store, issuer));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let state = pixshare_api::AppState {
        config: Arc::new(config.clone()),
        share_service,
        access_service,
    };

    let app = pixshare_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("PixShare server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("PixShare server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
