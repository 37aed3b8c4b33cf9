//! Category tree model.

use serde::{Deserialize, Serialize};
use storefront_core::types::CategoryId;

/// A category in the catalog hierarchy.
///
/// Nodes are immutable snapshots of what the category service returned;
/// `children` keeps the service's display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNode {
    /// Category identifier.
    pub id: CategoryId,
    /// Parent category (None for roots).
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
    /// Display name.
    pub name: String,
    /// URL-safe identifier, unique among siblings.
    pub slug: String,
    /// Depth from the root (0 for roots).
    #[serde(default)]
    pub level: u32,
    /// Number of products in this category and its descendants, when the query reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_count: Option<u64>,
    /// Child categories in display order.
    #[serde(default)]
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// Check if this category has no children in the current snapshot.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Find a direct child by slug.
    pub fn child(&self, slug: &str) -> Option<&CategoryNode> {
        self.children.iter().find(|c| c.slug == slug)
    }

    /// Clone of this node with descendants cut off below `max_depth` levels.
    ///
    /// `max_depth == 0` keeps only the node itself.
    pub fn truncated(&self, max_depth: u32) -> CategoryNode {
        CategoryNode {
            children: match max_depth {
                0 => Vec::new(),
                d => self.children.iter().map(|c| c.truncated(d - 1)).collect(),
            },
            ..self.shallow()
        }
    }

    /// Clone of this node without any children.
    pub fn shallow(&self) -> CategoryNode {
        CategoryNode {
            id: self.id,
            parent_id: self.parent_id,
            name: self.name.clone(),
            slug: self.slug.clone(),
            level: self.level,
            product_count: self.product_count,
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including this node.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_size).sum::<usize>()
    }
}

/// The ordered root categories returned by a single listing query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryForest {
    /// Root nodes in display order.
    pub roots: Vec<CategoryNode>,
}

impl CategoryForest {
    /// Create a forest from its roots.
    pub fn new(roots: Vec<CategoryNode>) -> Self {
        Self { roots }
    }

    /// Create an empty forest.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the forest has no roots.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes across all roots.
    pub fn total_nodes(&self) -> usize {
        self.roots.iter().map(CategoryNode::subtree_size).sum()
    }

    /// Clone of this forest with every root truncated to `max_depth`.
    pub fn truncated(&self, max_depth: u32) -> CategoryForest {
        Self::new(self.roots.iter().map(|r| r.truncated(max_depth)).collect())
    }
}

impl From<Vec<CategoryNode>> for CategoryForest {
    fn from(roots: Vec<CategoryNode>) -> Self {
        Self::new(roots)
    }
}
