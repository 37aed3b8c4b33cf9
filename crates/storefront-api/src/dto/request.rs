//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use storefront_core::types::CategoryId;
use storefront_entity::category::CategoryQuery;

/// Query parameters of the category listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CategoryListParams {
    /// Case-insensitive name search.
    #[validate(length(max = 100))]
    pub search: Option<String>,
    /// List children of this category instead of the roots.
    pub parent_id: Option<i64>,
    /// Whether nodes carry their subtrees (default true).
    pub include_children: Option<bool>,
    /// Depth cap below each returned node.
    #[validate(range(max = 32))]
    pub max_depth: Option<u32>,
}

impl CategoryListParams {
    /// Build the listing query, capping depth at `default_depth` when none is given.
    pub fn into_query(self, default_depth: u32) -> CategoryQuery {
        CategoryQuery {
            search: self.search.filter(|s| !s.trim().is_empty()),
            parent_id: self.parent_id.map(CategoryId),
            include_children: self.include_children.unwrap_or(true),
            max_depth: Some(self.max_depth.unwrap_or(default_depth)),
        }
    }
}

/// Sidebar state carried in the category page query string.
///
/// Filter keys (`brands`, `minPrice`, `maxPrice`, `minRating`) are read from
/// the raw query string so unparseable entries can be dropped one by one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogPageParams {
    /// Comma-joined explicitly selected category ids.
    pub selected: Option<String>,
    /// Comma-joined expanded tree node ids.
    pub expanded: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = CategoryListParams::default().into_query(5);
        assert!(query.include_children);
        assert_eq!(query.max_depth, Some(5));
        assert_eq!(query.search, None);
    }

    #[test]
    fn test_depth_is_validated() {
        let params = CategoryListParams {
            max_depth: Some(500),
            ..CategoryListParams::default()
        };
        assert!(params.validate().is_err());
    }
}
