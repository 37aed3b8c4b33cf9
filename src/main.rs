//! Storefront server: category navigation backend-for-frontend.
//!
//! Main entry point that loads the catalog snapshot and starts the HTTP API.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use storefront_cache::CacheManager;
use storefront_core::config::AppConfig;
use storefront_core::error::AppError;
use storefront_service::source::{CachedCatalog, CatalogSource, SnapshotCatalog};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from the config directory and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("STOREFRONT_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
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
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting storefront server");

    let snapshot = Arc::new(SnapshotCatalog::load(&config.catalog.snapshot_path).await?);

    let catalog: Arc<dyn CatalogSource> = if config.cache.enabled {
        tracing::info!(
            max_capacity = config.cache.max_capacity,
            ttl_seconds = config.cache.time_to_live_seconds,
            "Category cache enabled"
        );
        let cache = Arc::new(CacheManager::new(&config.cache));
        Arc::new(CachedCatalog::new(snapshot, cache))
    } else {
        snapshot
    };

    storefront_api::run_server(config, catalog).await
}
