//! Handlers for the `/products` resource.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use rdj_core::error::CoreError;
use rdj_core::types::DbId;
use rdj_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /products/
///
/// List active products, oldest first, each with its translations and the
/// resolved English convenience fields. Returns the full active set as a
/// bare JSON array; there is no pagination.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = ProductRepo::list_active_with_translations(&state.pool).await?;

    Ok(Json(products))
}

/// GET /products/{id}/
///
/// Get a single active product. An inactive product and a nonexistent id
/// both yield the same 404; the public API does not reveal which it was.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::find_active_with_translations(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    Ok(Json(product))
}
