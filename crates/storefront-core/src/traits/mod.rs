//! Core traits defined in `storefront-core` and implemented by other crates.

pub mod cache;

pub use cache::CacheProvider;
