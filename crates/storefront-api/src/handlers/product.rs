//! Product detail handlers.

use axum::Json;
use axum::extract::{Path, State};

use storefront_service::product::ColorOptions;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::parse_product_id;
use crate::state::AppState;

/// GET /api/products/{id}/colors
pub async fn get_colors(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ColorOptions>>, ApiError> {
    let id = parse_product_id(&id)?;
    let colors = state.product_service.colors(id).await?;
    Ok(Json(ApiResponse::ok(colors)))
}
