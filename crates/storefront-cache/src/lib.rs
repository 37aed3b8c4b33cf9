//! # storefront-cache
//!
//! Cache provider for storefront catalog responses, backed by an
//! in-process [moka](https://crates.io/crates/moka) cache.

pub mod keys;
pub mod memory;
pub mod provider;

pub use provider::CacheManager;
