//! Caching decorator for a catalog source.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use storefront_cache::CacheManager;
use storefront_cache::keys;
use storefront_core::result::AppResult;
use storefront_core::traits::cache::CacheProvider;
use storefront_core::types::{CategoryId, PageResponse, ProductId};
use storefront_entity::category::{AncestorRef, CategoryForest, CategoryNode, CategoryQuery};
use storefront_entity::product::Product;

use super::traits::CatalogSource;
use crate::category::path;
use crate::product::ProductQuery;

/// Caches category responses of an inner source.
///
/// Misses (`None` or empty breadcrumb chains) are never cached, and cache
/// failures fall through to the inner source. Product listings pass
/// straight through.
#[derive(Debug, Clone)]
pub struct CachedCatalog {
    inner: Arc<dyn CatalogSource>,
    cache: Arc<CacheManager>,
}

impl CachedCatalog {
    /// Wrap `inner` with `cache`.
    pub fn new(inner: Arc<dyn CatalogSource>, cache: Arc<CacheManager>) -> Self {
        Self { inner, cache }
    }

    async fn cached<T: DeserializeOwned + Send>(&self, key: &str) -> Option<T> {
        match self.cache.get_json::<T>(key).await {
            Ok(hit) => {
                debug!(key, hit = hit.is_some(), "Category cache lookup");
                hit
            }
            Err(e) => {
                warn!(key, error = %e, "Category cache read failed");
                None
            }
        }
    }

    async fn store<T: Serialize + Send + Sync>(&self, key: &str, value: &T) {
        if let Err(e) = self.cache.set_json(key, value).await {
            warn!(key, error = %e, "Category cache write failed");
        }
    }
}

#[async_trait]
impl CatalogSource for CachedCatalog {
    async fn list_categories(&self, query: &CategoryQuery) -> AppResult<CategoryForest> {
        let key = keys::category_listing(&query.fingerprint());
        if let Some(hit) = self.cached(&key).await {
            return Ok(hit);
        }
        let forest = self.inner.list_categories(query).await?;
        self.store(&key, &forest).await;
        Ok(forest)
    }

    async fn category_by_slug(&self, slug: &str) -> AppResult<Option<CategoryNode>> {
        let key = keys::category_by_slug(slug);
        if let Some(hit) = self.cached(&key).await {
            return Ok(Some(hit));
        }
        let node = self.inner.category_by_slug(slug).await?;
        if let Some(found) = &node {
            self.store(&key, found).await;
        }
        Ok(node)
    }

    async fn category_by_path(&self, nested_path: &str) -> AppResult<Option<CategoryNode>> {
        let key = keys::category_by_path(&path::normalize(nested_path));
        if let Some(hit) = self.cached(&key).await {
            return Ok(Some(hit));
        }
        let node = self.inner.category_by_path(nested_path).await?;
        if let Some(found) = &node {
            self.store(&key, found).await;
        }
        Ok(node)
    }

    async fn breadcrumbs(&self, id: CategoryId) -> AppResult<Vec<AncestorRef>> {
        let key = keys::category_breadcrumbs(id.get());
        if let Some(hit) = self.cached(&key).await {
            return Ok(hit);
        }
        let chain = self.inner.breadcrumbs(id).await?;
        if !chain.is_empty() {
            self.store(&key, &chain).await;
        }
        Ok(chain)
    }

    async fn list_products(&self, query: &ProductQuery) -> AppResult<PageResponse<Product>> {
        self.inner.list_products(query).await
    }

    async fn product(&self, id: ProductId) -> AppResult<Option<Product>> {
        self.inner.product(id).await
    }
}
