//! Cache key builders for every catalog cache entry.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

/// Prefix applied to all storefront cache keys.
const PREFIX: &str = "storefront";

/// Cache key for a category listing, keyed by the query fingerprint.
pub fn category_listing(fingerprint: &str) -> String {
    format!("{PREFIX}:category:list:{fingerprint}")
}

/// Cache key for a category looked up by flat slug.
pub fn category_by_slug(slug: &str) -> String {
    format!("{PREFIX}:category:slug:{slug}")
}

/// Cache key for a category looked up by nested path.
pub fn category_by_path(path: &str) -> String {
    format!("{PREFIX}:category:path:{path}")
}

/// Cache key for the breadcrumb chain of a category id.
pub fn category_breadcrumbs(category_id: i64) -> String {
    format!("{PREFIX}:category:crumbs:{category_id}")
}
