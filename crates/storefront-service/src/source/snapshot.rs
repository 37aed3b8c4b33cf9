//! Catalog source backed by an immutable JSON snapshot.
//!
//! Answers every query with the same semantics as the external catalog
//! service, so the rest of the crate cannot tell the two apart.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use storefront_core::error::{AppError, ErrorKind};
use storefront_core::result::AppResult;
use storefront_core::types::{CategoryId, PageResponse, ProductId};
use storefront_entity::category::{AncestorRef, CategoryForest, CategoryNode, CategoryQuery};
use storefront_entity::product::Product;

use super::traits::CatalogSource;
use crate::category::index;
use crate::product::{CategoryScope, ProductQuery};

/// On-disk catalog layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Category forest in display order.
    pub categories: CategoryForest,
    /// Every listed product.
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Catalog source serving a [`CatalogSnapshot`] held in memory.
#[derive(Debug, Clone)]
pub struct SnapshotCatalog {
    snapshot: CatalogSnapshot,
}

impl SnapshotCatalog {
    /// Wrap a snapshot, recomputing `level`/`parentId` from the tree shape.
    ///
    /// Fails when two siblings share a slug, since nested paths would no
    /// longer identify a single category.
    pub fn new(mut snapshot: CatalogSnapshot) -> AppResult<Self> {
        for root in &mut snapshot.categories.roots {
            assign_levels(root, None, 0);
        }
        check_sibling_slugs(&snapshot.categories.roots)?;
        Ok(Self { snapshot })
    }

    /// Load a snapshot from a JSON file.
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to read catalog snapshot '{}'", path.display()),
                e,
            )
        })?;
        let snapshot: CatalogSnapshot = serde_json::from_str(&raw)?;
        let catalog = Self::new(snapshot)?;

        info!(
            path = %path.display(),
            categories = catalog.snapshot.categories.total_nodes(),
            products = catalog.snapshot.products.len(),
            "Catalog snapshot loaded"
        );
        Ok(catalog)
    }

    /// The full category forest.
    pub fn forest(&self) -> &CategoryForest {
        &self.snapshot.categories
    }

    /// Node with one level of children, each carrying a product count.
    fn with_counts(&self, node: &CategoryNode) -> CategoryNode {
        let mut out = node.truncated(1);
        out.product_count = Some(self.count_products(node));
        for (child_out, child) in out.children.iter_mut().zip(&node.children) {
            child_out.product_count = Some(self.count_products(child));
        }
        out
    }

    fn count_products(&self, node: &CategoryNode) -> u64 {
        let ids = subtree_ids(node);
        self.snapshot
            .products
            .iter()
            .filter(|p| ids.contains(&p.category_id))
            .count() as u64
    }

    /// Category ids covered by a scope, descendants included. `None` means unrestricted.
    fn scope_ids(&self, scope: &CategoryScope) -> Option<HashSet<CategoryId>> {
        if matches!(scope, CategoryScope::All) {
            return None;
        }
        let mut ids = HashSet::new();
        for root in scope.roots() {
            if let Some(node) = index::find_by_id(&self.snapshot.categories, root) {
                ids.extend(subtree_ids(node));
            }
        }
        Some(ids)
    }
}

#[async_trait]
impl CatalogSource for SnapshotCatalog {
    async fn list_categories(&self, query: &CategoryQuery) -> AppResult<CategoryForest> {
        let forest = &self.snapshot.categories;

        // `parent_id` narrows the scope; `search` then looks inside it.
        let scope: Vec<&CategoryNode> = match query.parent_id {
            Some(parent_id) => index::find_by_id(forest, parent_id)
                .map(|parent| parent.children.iter().collect())
                .unwrap_or_default(),
            None => forest.roots.iter().collect(),
        };

        let selected = match query.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            Some(term) => {
                let term = term.to_lowercase();
                let mut hits = Vec::new();
                for node in scope {
                    collect_matches(node, &term, &mut hits);
                }
                hits
            }
            None => scope,
        };

        let roots = selected
            .into_iter()
            .map(|node| match (query.include_children, query.max_depth) {
                (false, _) => node.shallow(),
                (true, Some(depth)) => node.truncated(depth),
                (true, None) => node.clone(),
            })
            .collect();

        Ok(CategoryForest::new(roots))
    }

    async fn category_by_slug(&self, slug: &str) -> AppResult<Option<CategoryNode>> {
        let forest = &self.snapshot.categories;
        let found = forest
            .roots
            .iter()
            .find(|r| r.slug == slug)
            .or_else(|| index::walk(forest).map(|(n, _)| n).find(|n| n.slug == slug));

        debug!(slug, found = found.is_some(), "Category lookup by slug");
        Ok(found.map(|n| self.with_counts(n)))
    }

    async fn category_by_path(&self, path: &str) -> AppResult<Option<CategoryNode>> {
        let chain = index::resolve_path(&self.snapshot.categories, path);

        debug!(path, found = !chain.is_empty(), "Category lookup by nested path");
        Ok(chain.last().map(|n| self.with_counts(n)))
    }

    async fn breadcrumbs(&self, id: CategoryId) -> AppResult<Vec<AncestorRef>> {
        Ok(index::ancestors_of(&self.snapshot.categories, id)
            .into_iter()
            .map(AncestorRef::from)
            .collect())
    }

    async fn list_products(&self, query: &ProductQuery) -> AppResult<PageResponse<Product>> {
        let allowed = self.scope_ids(&query.scope);

        let matching: Vec<&Product> = self
            .snapshot
            .products
            .iter()
            .filter(|p| allowed.as_ref().is_none_or(|ids| ids.contains(&p.category_id)))
            .filter(|p| query.filters.matches(p))
            .collect();

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(query.page.offset as usize)
            .take(query.page.limit as usize)
            .cloned()
            .collect();

        Ok(PageResponse::new(items, total, query.page))
    }

    async fn product(&self, id: ProductId) -> AppResult<Option<Product>> {
        Ok(self.snapshot.products.iter().find(|p| p.id == id).cloned())
    }
}

fn assign_levels(node: &mut CategoryNode, parent: Option<CategoryId>, level: u32) {
    node.parent_id = parent;
    node.level = level;
    let id = node.id;
    for child in &mut node.children {
        assign_levels(child, Some(id), level + 1);
    }
}

fn check_sibling_slugs(siblings: &[CategoryNode]) -> AppResult<()> {
    let mut seen = BTreeSet::new();
    for node in siblings {
        if !seen.insert(node.slug.as_str()) {
            return Err(AppError::validation(format!(
                "Duplicate sibling slug '{}' (category {})",
                node.slug, node.id
            )));
        }
        check_sibling_slugs(&node.children)?;
    }
    Ok(())
}

fn subtree_ids(node: &CategoryNode) -> HashSet<CategoryId> {
    let mut ids = HashSet::new();
    let mut stack = vec![node];
    while let Some(n) = stack.pop() {
        ids.insert(n.id);
        stack.extend(n.children.iter());
    }
    ids
}

/// Pre-order matches of a lowercase `term` against node names.
fn collect_matches<'a>(node: &'a CategoryNode, term: &str, hits: &mut Vec<&'a CategoryNode>) {
    if node.name.to_lowercase().contains(term) {
        hits.push(node);
    }
    for child in &node.children {
        collect_matches(child, term, hits);
    }
}
