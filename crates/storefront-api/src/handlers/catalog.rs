//! Category page handlers for the catch-all catalog route.

use axum::Json;
use axum::extract::{Path, Query, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use validator::Validate;

use storefront_core::error::AppError;
use storefront_entity::product::FilterState;
use storefront_service::page::{CategoryPage, RouteState};

use crate::dto::request::CatalogPageParams;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{PaginationParams, parse_id_list};
use crate::state::AppState;

/// GET /api/catalog
pub async fn browse_root(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
    Query(params): Query<CatalogPageParams>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, ApiError> {
    render_page(state, "", raw, params, pagination).await
}

/// GET /api/catalog/{*path}
pub async fn browse_path(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(raw): RawQuery,
    Query(params): Query<CatalogPageParams>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, ApiError> {
    render_page(state, &path, raw, params, pagination).await
}

async fn render_page(
    state: AppState,
    path: &str,
    raw_query: Option<String>,
    params: CatalogPageParams,
    pagination: PaginationParams,
) -> Result<Response, ApiError> {
    pagination
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let filters = FilterState::from_query_string(raw_query.as_deref().unwrap_or_default());

    let mut page = CategoryPage::new(state.catalog.clone(), state.page_settings())
        .with_expanded(parse_id_list(params.expanded.as_deref()))
        .with_selection(parse_id_list(params.selected.as_deref()))
        .with_filters(filters)
        .with_page(pagination.offset, pagination.limit);

    let status = status_for(page.navigate(path).await);

    let view = page.view();
    let body = if status.is_success() {
        ApiResponse::ok(view)
    } else {
        ApiResponse::failed(view)
    };

    Ok((status, Json(body)).into_response())
}

/// HTTP status for the state a navigation ended in.
fn status_for(state: &RouteState) -> StatusCode {
    match state {
        RouteState::NotFound => StatusCode::NOT_FOUND,
        RouteState::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        RouteState::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        RouteState::Loading | RouteState::RootBrowse | RouteState::Resolved { .. } => {
            StatusCode::OK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_transport_failures_are_503() {
        let unavailable = RouteState::Unavailable {
            message: "timed out".to_string(),
        };
        let failed = RouteState::Failed {
            message: "invariant violated".to_string(),
        };
        assert_eq!(status_for(&unavailable), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_for(&failed), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_for(&RouteState::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(&RouteState::RootBrowse), StatusCode::OK);
    }
}
