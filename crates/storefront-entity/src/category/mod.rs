//! Category tree entities.

pub mod breadcrumb;
pub mod model;
pub mod query;

pub use breadcrumb::{AncestorRef, BreadcrumbItem};
pub use model::{CategoryForest, CategoryNode};
pub use query::CategoryQuery;
