//! HTTP request handlers.

pub mod catalog;
pub mod category;
pub mod health;
pub mod product;
