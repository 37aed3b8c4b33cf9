//! Catalog source trait.

use async_trait::async_trait;

use storefront_core::result::AppResult;
use storefront_core::types::{CategoryId, PageResponse, ProductId};
use storefront_entity::category::{AncestorRef, CategoryForest, CategoryNode, CategoryQuery};
use storefront_entity::product::Product;

use crate::product::ProductQuery;

/// Queries the storefront issues against the external catalog service.
///
/// A miss is `Ok(None)` (or an empty collection), never an error; `Err`
/// is reserved for transport and upstream failures.
#[async_trait]
pub trait CatalogSource: Send + Sync + std::fmt::Debug + 'static {
    /// Category listing: roots, children of a parent, or name matches.
    async fn list_categories(&self, query: &CategoryQuery) -> AppResult<CategoryForest>;

    /// A category by flat slug, with one level of children carrying product counts.
    async fn category_by_slug(&self, slug: &str) -> AppResult<Option<CategoryNode>>;

    /// A category by nested path, with one level of children carrying product counts.
    async fn category_by_path(&self, path: &str) -> AppResult<Option<CategoryNode>>;

    /// Root-first ancestor chain of a category, ending at the category itself.
    async fn breadcrumbs(&self, id: CategoryId) -> AppResult<Vec<AncestorRef>>;

    /// Filtered, paginated product listing.
    async fn list_products(&self, query: &ProductQuery) -> AppResult<PageResponse<Product>>;

    /// A single product.
    async fn product(&self, id: ProductId) -> AppResult<Option<Product>>;
}
