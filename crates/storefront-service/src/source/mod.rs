//! The seam to the external catalog service.

pub mod cached;
pub mod snapshot;
pub mod traits;

pub use cached::CachedCatalog;
pub use snapshot::{CatalogSnapshot, SnapshotCatalog};
pub use traits::CatalogSource;
