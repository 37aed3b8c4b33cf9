//! Breadcrumb construction from ancestor chains.

use std::sync::Arc;

use tracing::debug;

use storefront_core::result::AppResult;
use storefront_core::types::CategoryId;
use storefront_entity::category::{AncestorRef, BreadcrumbItem, CategoryForest, CategoryNode};

use super::{index, path};
use crate::source::CatalogSource;

/// Breadcrumb for a root-first chain of tree nodes.
///
/// Each item links to the path of the chain up to and including it; the
/// last item is the current page and is not linkable.
pub fn from_ancestors(chain: &[&CategoryNode]) -> Vec<BreadcrumbItem> {
    build(chain.iter().map(|n| (n.id, n.name.as_str(), n.slug.as_str())))
}

/// Breadcrumb for the flat chain returned by the breadcrumb-by-id query.
pub fn from_ancestor_refs(refs: &[AncestorRef]) -> Vec<BreadcrumbItem> {
    build(refs.iter().map(|r| (r.id, r.name.as_str(), r.slug.as_str())))
}

/// Breadcrumb for a category id within a forest; empty when the id is absent.
pub fn from_category_id(forest: &CategoryForest, id: CategoryId) -> Vec<BreadcrumbItem> {
    from_ancestors(&index::ancestors_of(forest, id))
}

fn build<'a>(steps: impl ExactSizeIterator<Item = (CategoryId, &'a str, &'a str)>) -> Vec<BreadcrumbItem> {
    let last = steps.len().saturating_sub(1);
    let mut slugs: Vec<&str> = Vec::with_capacity(steps.len());

    steps
        .enumerate()
        .map(|(i, (id, name, slug))| {
            slugs.push(slug);
            BreadcrumbItem {
                id,
                name: name.to_string(),
                path: path::encode(slugs.as_slice()),
                linkable: i != last,
            }
        })
        .collect()
}

/// Resolves breadcrumbs when the caller holds no forest.
#[derive(Debug, Clone)]
pub struct BreadcrumbService {
    source: Arc<dyn CatalogSource>,
}

impl BreadcrumbService {
    /// Creates a new breadcrumb service.
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Breadcrumb for a category id via the breadcrumb-by-id query.
    pub async fn for_category(&self, id: CategoryId) -> AppResult<Vec<BreadcrumbItem>> {
        let refs = self.source.breadcrumbs(id).await?;
        debug!(category_id = %id, depth = refs.len(), "Breadcrumbs resolved");
        Ok(from_ancestor_refs(&refs))
    }

    /// Nested path of a category id, or `None` when it does not exist.
    pub async fn path_for(&self, id: CategoryId) -> AppResult<Option<String>> {
        let crumbs = self.for_category(id).await?;
        Ok(crumbs.last().map(|c| c.path.clone()))
    }
}
