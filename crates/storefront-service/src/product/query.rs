//! Scoping of product listing queries.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use storefront_core::types::{CategoryId, PageRequest};
use storefront_entity::product::FilterState;

/// Which categories a product listing is restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "ids", rename_all = "snake_case")]
pub enum CategoryScope {
    /// No category restriction (root browse).
    All,
    /// The category resolved from the route, with its descendants.
    Category(CategoryId),
    /// Categories picked explicitly in the sidebar tree, with their descendants.
    Selection(BTreeSet<CategoryId>),
}

impl CategoryScope {
    /// Pick the governing scope: an explicit selection wins over the routed category.
    pub fn governing(resolved: Option<CategoryId>, selection: &BTreeSet<CategoryId>) -> Self {
        if !selection.is_empty() {
            return Self::Selection(selection.clone());
        }
        match resolved {
            Some(id) => Self::Category(id),
            None => Self::All,
        }
    }

    /// The category ids this scope names, empty for [`CategoryScope::All`].
    pub fn roots(&self) -> Vec<CategoryId> {
        match self {
            Self::All => Vec::new(),
            Self::Category(id) => vec![*id],
            Self::Selection(ids) => ids.iter().copied().collect(),
        }
    }
}

/// A product listing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Category restriction.
    pub scope: CategoryScope,
    /// Brand/price/rating filters.
    pub filters: FilterState,
    /// Offset/limit window.
    pub page: PageRequest,
}

impl ProductQuery {
    /// Build the query for a category page.
    pub fn scoped(
        resolved: Option<CategoryId>,
        selection: &BTreeSet<CategoryId>,
        filters: &FilterState,
        page: PageRequest,
    ) -> Self {
        Self {
            scope: CategoryScope::governing(resolved, selection),
            filters: filters.clone(),
            page,
        }
    }
}
