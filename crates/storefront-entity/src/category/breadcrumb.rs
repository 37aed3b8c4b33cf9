//! Breadcrumb shapes.

use serde::{Deserialize, Serialize};
use storefront_core::types::CategoryId;

use super::model::CategoryNode;

/// One entry of the flat ancestor list returned by the breadcrumb-by-id query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestorRef {
    /// Category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Category slug.
    pub slug: String,
    /// Depth from the root.
    pub level: u32,
}

impl From<&CategoryNode> for AncestorRef {
    fn from(node: &CategoryNode) -> Self {
        Self {
            id: node.id,
            name: node.name.clone(),
            slug: node.slug.clone(),
            level: node.level,
        }
    }
}

/// A single linkable step in a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    /// Category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Nested path from the root down to this step.
    pub path: String,
    /// False for the last item (the current page).
    pub linkable: bool,
}
