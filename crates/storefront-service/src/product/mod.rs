//! Product listing and product detail helpers.

pub mod attributes;
pub mod query;
pub mod service;

pub use attributes::{ColorOptions, ColorSource};
pub use query::{CategoryScope, ProductQuery};
pub use service::ProductService;
