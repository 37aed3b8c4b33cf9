//! Product entities and listing filters.

pub mod filter;
pub mod model;

pub use filter::FilterState;
pub use model::{Product, ProductAttribute};
