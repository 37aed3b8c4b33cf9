//! Catalog source and navigation configuration.

use serde::{Deserialize, Serialize};

/// Settings for the category source and the category page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the JSON catalog snapshot served by the snapshot source.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
    /// Depth cap passed as `maxDepth` on category listing queries.
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    /// Product page size used when the request gives no `limit`.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Upper bound on a requested product page size.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            max_depth: default_max_depth(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_snapshot_path() -> String {
    "data/catalog.json".to_string()
}

fn default_max_depth() -> u32 {
    5
}

fn default_page_size() -> u64 {
    24
}

fn default_max_page_size() -> u64 {
    96
}
