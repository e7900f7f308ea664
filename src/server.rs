/// Server setup and initialization
///
/// Wires together the store, the sample catalog seed and the HTTP routes.
/// Provides the main application factory function for creating the Axum app.

use crate::{
    api::{create_contact_routes, create_project_routes, AppState},
    catalog,
    config::{Config, StoreBackend},
    store::{MemoryStore, PortfolioStore, SqliteStore},
};
use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Open the store selected by the configuration
pub async fn open_store(config: &Config) -> Result<Arc<dyn PortfolioStore>> {
    let store: Arc<dyn PortfolioStore> = match config.store.backend {
        StoreBackend::Sqlite => {
            tracing::info!("🗄️ Using SQLite store at {}", config.store.database_path);
            let store = SqliteStore::connect(&config.store.database_path)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to open portfolio database: {}", e))?;
            Arc::new(store)
        }
        StoreBackend::Memory => {
            tracing::info!("🧠 Using in-memory store (data is lost on restart)");
            Arc::new(MemoryStore::new())
        }
    };

    Ok(store)
}

/// Build the router over an already opened store
pub fn build_router(store: Arc<dyn PortfolioStore>) -> Router {
    let state = AppState::new(store);

    Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        .merge(create_project_routes())
        .merge(create_contact_routes())
        .with_state(state)
}

/// Create the main Axum application with all routes
///
/// Opens the configured store, seeds the sample catalog when asked to, and
/// builds the router.
pub async fn create_app(config: Config) -> Result<Router> {
    let store = open_store(&config).await?;

    if config.store.seed_samples {
        tracing::info!("🌱 Checking whether the sample catalog needs seeding");
        catalog::seed_if_empty(store.as_ref())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to seed sample projects: {}", e))?;
    }

    tracing::info!("📡 Creating HTTP router with all endpoints");
    let app = build_router(store);

    tracing::info!("✅ Application initialized successfully");
    Ok(app)
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portfolio_api=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();
}

/// Start the HTTP server with the given configuration
///
/// Creates the application and starts the Axum server on the configured address and port.
pub async fn start_server(config: Config) -> Result<()> {
    init_tracing();

    tracing::info!("Starting portfolio API server...");

    let app = create_app(config.clone()).await?;

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
