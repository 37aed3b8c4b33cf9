//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use storefront_core::config::AppConfig;
use storefront_service::category::BreadcrumbService;
use storefront_service::page::PageSettings;
use storefront_service::product::ProductService;
use storefront_service::source::CatalogSource;

/// Shared application state passed to every handler via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The catalog source every request reads from.
    pub catalog: Arc<dyn CatalogSource>,
    /// Breadcrumb lookups by category id.
    pub breadcrumb_service: Arc<BreadcrumbService>,
    /// Product lookups.
    pub product_service: Arc<ProductService>,
    /// Server start time.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Wire the services around a catalog source.
    pub fn new(config: AppConfig, catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            config: Arc::new(config),
            breadcrumb_service: Arc::new(BreadcrumbService::new(Arc::clone(&catalog))),
            product_service: Arc::new(ProductService::new(Arc::clone(&catalog))),
            catalog,
            started_at: Utc::now(),
        }
    }

    /// Limits applied to category pages built for requests.
    pub fn page_settings(&self) -> PageSettings {
        PageSettings::from(&self.config.catalog)
    }
}
