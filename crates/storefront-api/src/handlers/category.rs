//! Category listing, breadcrumb and path handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use storefront_core::error::AppError;
use storefront_entity::category::{BreadcrumbItem, CategoryForest};

use crate::dto::request::CategoryListParams;
use crate::dto::response::{ApiResponse, CategoryPathResponse};
use crate::error::ApiError;
use crate::extractors::parse_category_id;
use crate::state::AppState;

/// GET /api/categories?search=&parent_id=&include_children=&max_depth=
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<CategoryListParams>,
) -> Result<Json<ApiResponse<CategoryForest>>, ApiError> {
    params
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let query = params.into_query(state.config.catalog.max_depth);
    let forest = state.catalog.list_categories(&query).await?;
    Ok(Json(ApiResponse::ok(forest)))
}

/// GET /api/categories/{id}/breadcrumbs
pub async fn get_breadcrumbs(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<BreadcrumbItem>>>, ApiError> {
    let id = parse_category_id(&id)?;
    let crumbs = state.breadcrumb_service.for_category(id).await?;
    if crumbs.is_empty() {
        return Err(AppError::not_found(format!("Category {id} not found")).into());
    }
    Ok(Json(ApiResponse::ok(crumbs)))
}

/// GET /api/categories/{id}/path
pub async fn get_path(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CategoryPathResponse>>, ApiError> {
    let id = parse_category_id(&id)?;
    let path = state
        .breadcrumb_service
        .path_for(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))?;
    Ok(Json(ApiResponse::ok(CategoryPathResponse { id, path })))
}
