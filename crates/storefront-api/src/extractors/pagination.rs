//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Offset/limit query parameters for the product listing of a category page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PaginationParams {
    /// Number of products to skip (default: 0).
    #[serde(default)]
    pub offset: u64,
    /// Page size; falls back to the configured default and is capped at the configured maximum.
    #[validate(range(min = 1))]
    pub limit: Option<u64>,
}
