//! Category listing query parameters.

use serde::{Deserialize, Serialize};
use storefront_core::types::CategoryId;

/// Inputs of the category listing query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryQuery {
    /// Case-insensitive name search.
    #[serde(default)]
    pub search: Option<String>,
    /// List the children of this category instead of the roots.
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
    /// Whether returned nodes carry their children.
    #[serde(default)]
    pub include_children: bool,
    /// Depth cap below each returned node.
    #[serde(default)]
    pub max_depth: Option<u32>,
}

impl CategoryQuery {
    /// Root categories with their subtrees, capped at `max_depth`.
    pub fn tree(max_depth: u32) -> Self {
        Self {
            include_children: true,
            max_depth: Some(max_depth),
            ..Self::default()
        }
    }

    /// A stable string form of the query, used for cache keys.
    pub fn fingerprint(&self) -> String {
        format!(
            "s={}|p={}|c={}|d={}",
            self.search.as_deref().unwrap_or("").to_lowercase(),
            self.parent_id.map(|p| p.to_string()).unwrap_or_default(),
            self.include_children,
            self.max_depth.map(|d| d.to_string()).unwrap_or_default(),
        )
    }
}
