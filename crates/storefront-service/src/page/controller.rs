//! The category page controller.
//!
//! One [`CategoryPage`] owns the route, expansion, filter, selection and
//! pagination state of a single page. Navigation is split into
//! [`begin`](CategoryPage::begin), [`fetch`](CategoryPage::fetch) and
//! [`complete`](CategoryPage::complete) so a response that arrives after
//! a newer navigation can be recognised and dropped.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, error, warn};

use storefront_core::config::catalog::CatalogConfig;
use storefront_core::error::AppError;
use storefront_core::result::AppResult;
use storefront_core::types::{CategoryId, PageRequest, PageResponse};
use storefront_entity::category::{BreadcrumbItem, CategoryForest, CategoryNode, CategoryQuery};
use storefront_entity::product::{FilterState, Product};

use super::view::{CategoryPageView, RouteState, RouteView};
use crate::category::{breadcrumb, index, ExpansionSet, RoutePlan, RouteSequencer, RouteTicket};
use crate::product::ProductQuery;
use crate::source::CatalogSource;

/// Result of the single-category query for a route.
///
/// `Ok(None)` is a miss, or the absence of a query for root browse.
pub type CategoryFetch = AppResult<Option<CategoryNode>>;

/// Limits the page applies to its queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSettings {
    pub max_depth: u32,
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self::from(&CatalogConfig::default())
    }
}

impl From<&CatalogConfig> for PageSettings {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
        }
    }
}

/// State and behaviour of one category page.
#[derive(Debug)]
pub struct CategoryPage {
    source: Arc<dyn CatalogSource>,
    settings: PageSettings,
    sequencer: RouteSequencer,
    route: RoutePlan,
    forest: CategoryForest,
    expansion: ExpansionSet,
    selection: BTreeSet<CategoryId>,
    filters: FilterState,
    page: PageRequest,
    state: RouteState,
    category: Option<CategoryNode>,
    breadcrumbs: Vec<BreadcrumbItem>,
    products: Option<PageResponse<Product>>,
}

impl CategoryPage {
    /// Creates a page with nothing expanded, selected or filtered.
    pub fn new(source: Arc<dyn CatalogSource>, settings: PageSettings) -> Self {
        Self {
            source,
            page: PageRequest::bounded(0, settings.default_page_size, settings.max_page_size),
            settings,
            sequencer: RouteSequencer::new(),
            route: RoutePlan::RootBrowse,
            forest: CategoryForest::empty(),
            expansion: ExpansionSet::new(),
            selection: BTreeSet::new(),
            filters: FilterState::default(),
            state: RouteState::Loading,
            category: None,
            breadcrumbs: Vec::new(),
            products: None,
        }
    }

    /// Seed the expansion set, e.g. from the `expanded=` query parameter.
    pub fn with_expanded(mut self, ids: impl IntoIterator<Item = CategoryId>) -> Self {
        self.expansion = ids.into_iter().collect();
        self
    }

    /// Seed the explicit sidebar selection.
    pub fn with_selection(mut self, ids: impl IntoIterator<Item = CategoryId>) -> Self {
        self.selection = ids.into_iter().collect();
        self
    }

    /// Seed the brand/price/rating filters, e.g. parsed from the query string.
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    /// Set the product window; `limit` falls back to the configured page size.
    pub fn with_page(mut self, offset: u64, limit: Option<u64>) -> Self {
        self.page = PageRequest::bounded(
            offset,
            limit.unwrap_or(self.settings.default_page_size),
            self.settings.max_page_size,
        );
        self
    }

    /// Resolve `raw_path` and load everything the page shows for it.
    pub async fn navigate(&mut self, raw_path: &str) -> &RouteState {
        let ticket = self.begin(raw_path);
        let fetched = self.fetch(&ticket).await;
        self.complete(ticket, fetched).await;
        &self.state
    }

    /// Start a navigation. The returned ticket supersedes every earlier one.
    pub fn begin(&mut self, raw_path: &str) -> RouteTicket {
        let ticket = self.sequencer.issue(raw_path);
        debug!(
            seq = ticket.seq(),
            path = %ticket.path(),
            lookup = RoutePlan::plan(ticket.path()).kind(),
            "Category navigation started"
        );
        self.state = RouteState::Loading;
        ticket
    }

    /// Run the single-category query the ticket's route calls for.
    pub async fn fetch(&self, ticket: &RouteTicket) -> CategoryFetch {
        match RoutePlan::plan(ticket.path()) {
            RoutePlan::RootBrowse => Ok(None),
            RoutePlan::FlatLookup { slug } => self.source.category_by_slug(&slug).await,
            RoutePlan::NestedLookup { path } => self.source.category_by_path(&path).await,
        }
    }

    /// Apply a fetch result. Returns `false` when the ticket is stale and the
    /// result was dropped.
    pub async fn complete(&mut self, ticket: RouteTicket, fetched: CategoryFetch) -> bool {
        if !self.sequencer.is_current(&ticket) {
            debug!(
                seq = ticket.seq(),
                latest = self.sequencer.latest(),
                path = %ticket.path(),
                "Discarding stale category response"
            );
            return false;
        }

        self.route = RoutePlan::plan(ticket.path());
        self.category = None;
        self.breadcrumbs.clear();
        self.products = None;

        let applied = match fetched {
            Ok(Some(node)) => self.apply_resolved(node).await,
            Ok(None) if self.route == RoutePlan::RootBrowse => self.apply_root_browse().await,
            Ok(None) => {
                debug!(path = %self.route.path(), "Category not found");
                self.state = RouteState::NotFound;
                Ok(())
            }
            Err(e) => Err(e),
        };

        if let Err(e) = applied {
            self.mark_failed(e);
        }
        true
    }

    /// Flip a tree node open or closed. Returns whether it is expanded afterwards.
    pub fn toggle(&mut self, id: CategoryId) -> bool {
        self.expansion.toggle(id)
    }

    /// Replace the explicit selection and reload products from the first page.
    pub async fn select(&mut self, ids: impl IntoIterator<Item = CategoryId>) {
        self.selection = ids.into_iter().collect();
        self.page = self.page.at(0);
        if self.state.lists_products() {
            self.auto_expand();
            self.reload_products().await;
        }
    }

    /// Replace the filters and reload products from the first page.
    pub async fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.page = self.page.at(0);
        self.reload_products().await;
    }

    /// Move the product window. Category resolution is left untouched.
    pub async fn set_page(&mut self, offset: u64) {
        self.page = self.page.at(offset);
        self.reload_products().await;
    }

    /// Re-issue the current route.
    pub async fn retry(&mut self) -> &RouteState {
        let path = self.route.path().to_string();
        self.navigate(&path).await
    }

    pub fn state(&self) -> &RouteState {
        &self.state
    }

    pub fn route(&self) -> &RoutePlan {
        &self.route
    }

    pub fn category(&self) -> Option<&CategoryNode> {
        self.category.as_ref()
    }

    pub fn breadcrumbs(&self) -> &[BreadcrumbItem] {
        &self.breadcrumbs
    }

    pub fn expansion(&self) -> &ExpansionSet {
        &self.expansion
    }

    pub fn products(&self) -> Option<&PageResponse<Product>> {
        self.products.as_ref()
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    /// The active filters in query-string form.
    pub fn filters_query(&self) -> String {
        self.filters.to_query_string()
    }

    /// Snapshot of the page for rendering.
    pub fn view(&self) -> CategoryPageView {
        CategoryPageView {
            route: RouteView {
                state: self.state.clone(),
                lookup: self.route.kind(),
                path: self.route.path().to_string(),
                segments: self.route.segments().into_iter().map(String::from).collect(),
                canonical_path: self.breadcrumbs.last().map(|c| c.path.clone()),
            },
            category: self.category.clone(),
            breadcrumbs: self.breadcrumbs.clone(),
            expanded: self.expansion.ids(),
            selected: self.selection.iter().copied().collect(),
            forest: self.forest.clone(),
            products: self.products.clone(),
            filters: self.filters_query(),
        }
    }

    async fn apply_root_browse(&mut self) -> AppResult<()> {
        self.ensure_forest().await?;
        self.state = RouteState::RootBrowse;
        self.auto_expand();
        self.products = Some(self.query_products().await?);
        Ok(())
    }

    async fn apply_resolved(&mut self, node: CategoryNode) -> AppResult<()> {
        self.ensure_forest().await?;

        let mut crumbs = breadcrumb::from_category_id(&self.forest, node.id);
        if crumbs.is_empty() {
            // Deeper than the loaded tree.
            crumbs = breadcrumb::from_ancestor_refs(&self.source.breadcrumbs(node.id).await?);
        }

        debug!(
            category_id = %node.id,
            path = %self.route.path(),
            depth = crumbs.len(),
            "Category resolved"
        );
        self.state = RouteState::Resolved {
            category_id: node.id,
        };
        self.breadcrumbs = crumbs;
        self.category = Some(node);
        self.auto_expand();
        self.products = Some(self.query_products().await?);
        Ok(())
    }

    async fn ensure_forest(&mut self) -> AppResult<()> {
        if self.forest.is_empty() {
            let query = CategoryQuery::tree(self.settings.max_depth);
            self.forest = self.source.list_categories(&query).await?;
        }
        Ok(())
    }

    fn auto_expand(&mut self) {
        let current = self
            .breadcrumbs
            .last()
            .map(|c| c.path.clone())
            .unwrap_or_else(|| self.route.path().to_string());
        let mut added = self
            .expansion
            .auto_expand(&self.forest, &current, &self.selection);
        if index::resolve_path(&self.forest, &current).is_empty() {
            added += self
                .expansion
                .expand_loaded(&self.forest, self.breadcrumbs.iter().map(|c| c.id));
        }
        debug!(path = %current, added, "Auto-expanded category tree");
    }

    async fn query_products(&self) -> AppResult<PageResponse<Product>> {
        let query = ProductQuery::scoped(
            self.state.category_id(),
            &self.selection,
            &self.filters,
            self.page,
        );
        debug!(
            path = %self.route.path(),
            filtered = !self.filters.is_empty(),
            offset = self.page.offset,
            "Querying products"
        );
        self.source.list_products(&query).await
    }

    async fn reload_products(&mut self) {
        if !self.state.lists_products() {
            return;
        }
        match self.query_products().await {
            Ok(products) => self.products = Some(products),
            Err(e) => self.mark_failed(e),
        }
    }

    /// Transport failures become the retryable `Unavailable` state; anything
    /// else is terminal for this route.
    fn mark_failed(&mut self, err: AppError) {
        if err.is_transport() {
            warn!(path = %self.route.path(), error = %err, "Catalog source unavailable");
            self.state = RouteState::Unavailable {
                message: err.message,
            };
        } else {
            error!(
                path = %self.route.path(),
                kind = %err.kind,
                error = %err,
                "Category page failed"
            );
            self.state = RouteState::Failed {
                message: err.message,
            };
        }
        self.category = None;
        self.breadcrumbs.clear();
        self.products = None;
    }
}
