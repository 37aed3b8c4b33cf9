//! Route definitions for the storefront HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

/// Build the API router with every route, without middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(category_routes())
        .merge(catalog_routes())
        .merge(product_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Category listing, breadcrumbs and nested paths by id
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::category::list_categories))
        .route(
            "/categories/{id}/breadcrumbs",
            get(handlers::category::get_breadcrumbs),
        )
        .route("/categories/{id}/path", get(handlers::category::get_path))
}

/// Category page views for the catch-all route
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(handlers::catalog::browse_root))
        .route("/catalog/{*path}", get(handlers::catalog::browse_path))
}

fn product_routes() -> Router<AppState> {
    Router::new().route("/products/{id}/colors", get(handlers::product::get_colors))
}
