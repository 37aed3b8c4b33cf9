//! Product detail lookups.

use std::sync::Arc;

use tracing::debug;

use storefront_core::error::AppError;
use storefront_core::result::AppResult;
use storefront_core::types::ProductId;
use storefront_entity::product::Product;

use super::attributes::{self, ColorOptions};
use crate::source::CatalogSource;

/// Product lookups backed by the catalog source.
#[derive(Debug, Clone)]
pub struct ProductService {
    source: Arc<dyn CatalogSource>,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Fetch a product, failing with `NotFound` when it does not exist.
    pub async fn get(&self, id: ProductId) -> AppResult<Product> {
        self.source
            .product(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))
    }

    /// Colour options of a product.
    pub async fn colors(&self, id: ProductId) -> AppResult<ColorOptions> {
        let product = self.get(id).await?;
        let options = attributes::color_options(&product);
        debug!(product_id = %id, source = ?options.source, "Colour options resolved");
        Ok(options)
    }
}
