//! # storefront-entity
//!
//! Domain models for the storefront catalog. Every struct in this crate
//! mirrors a shape handed out by the external category or product
//! service, or a value object derived from one. All entities derive
//! `Debug`, `Clone`, `Serialize` and `Deserialize`.

pub mod category;
pub mod product;
