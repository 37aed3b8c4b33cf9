//! Typed path and list parameter helpers.

use storefront_core::error::AppError;
use storefront_core::types::{CategoryId, ProductId};

/// Parses a category id from a path segment.
pub fn parse_category_id(s: &str) -> Result<CategoryId, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("Invalid category id: {s}")))
}

/// Parses a product id from a path segment.
pub fn parse_product_id(s: &str) -> Result<ProductId, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("Invalid product id: {s}")))
}

/// Parses a comma-joined id list such as `selected=3,5`. Unparseable entries are dropped.
pub fn parse_id_list(raw: Option<&str>) -> Vec<CategoryId> {
    raw.map(|r| r.split(',').filter_map(|id| id.parse().ok()).collect())
        .unwrap_or_default()
}
