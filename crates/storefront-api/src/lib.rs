//! # storefront-api
//!
//! HTTP backend-for-frontend for storefront category navigation, built
//! on Axum. A rendering layer calls these endpoints for resolved paths,
//! breadcrumbs and category page views instead of re-deriving them.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
