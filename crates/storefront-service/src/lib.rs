//! # storefront-service
//!
//! Category navigation for the storefront. The pure pieces (path codec,
//! tree index, expansion state, breadcrumbs, route planning) never await
//! anything and are recomputed whenever their inputs change. The
//! [`page::CategoryPage`] controller drives them from fetched data, and
//! [`source::CatalogSource`] is the seam to the external catalog service.

pub mod category;
pub mod page;
pub mod product;
pub mod source;

#[cfg(test)]
mod testing;

pub use category::{BreadcrumbService, ExpansionSet, RoutePlan};
pub use page::{CategoryPage, CategoryPageView, RouteState};
pub use source::{CachedCatalog, CatalogSnapshot, CatalogSource, SnapshotCatalog};
