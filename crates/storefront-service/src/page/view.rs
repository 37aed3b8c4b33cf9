//! Serializable snapshot of a category page.

use serde::Serialize;

use storefront_core::types::{CategoryId, PageResponse};
use storefront_entity::category::{BreadcrumbItem, CategoryForest, CategoryNode};
use storefront_entity::product::Product;

/// Where the page is in resolving its route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RouteState {
    /// A category fetch is in flight.
    Loading,
    /// The route is empty; roots are listed.
    RootBrowse,
    /// The route resolved to a category.
    #[serde(rename_all = "camelCase")]
    Resolved { category_id: CategoryId },
    /// The category query returned no match.
    NotFound,
    /// The catalog source failed; [`retry`](super::CategoryPage::retry) re-issues the route.
    Unavailable { message: String },
    /// Building the page failed for a reason other than the transport.
    /// Retrying the same route will not help.
    Failed { message: String },
}

impl RouteState {
    /// Whether products are listed in this state.
    pub fn lists_products(&self) -> bool {
        matches!(self, Self::RootBrowse | Self::Resolved { .. })
    }

    /// The resolved category id, if any.
    pub fn category_id(&self) -> Option<CategoryId> {
        match self {
            Self::Resolved { category_id } => Some(*category_id),
            _ => None,
        }
    }
}

/// The route part of the view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteView {
    #[serde(flatten)]
    pub state: RouteState,
    /// Lookup kind chosen for the route.
    pub lookup: &'static str,
    /// Normalized route path.
    pub path: String,
    pub segments: Vec<String>,
    /// Full nested path of the resolved category. Differs from `path` on flat lookups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_path: Option<String>,
}

/// Everything a rendering layer needs to draw the category page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPageView {
    pub route: RouteView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryNode>,
    pub breadcrumbs: Vec<BreadcrumbItem>,
    /// Expanded tree node ids, ascending.
    pub expanded: Vec<CategoryId>,
    /// Explicit sidebar selection, ascending.
    pub selected: Vec<CategoryId>,
    pub forest: CategoryForest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<PageResponse<Product>>,
    /// Active filters in query-string form.
    pub filters: String,
}
