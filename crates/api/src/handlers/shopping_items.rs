//! Handlers for the `/shopping-items` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use offload_core::error::CoreError;
use offload_core::types::DbId;
use offload_db::models::shopping_item::{ShoppingItem, UpdateShoppingItem};
use offload_db::repositories::ShoppingItemRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /shopping-items/{user_id}`.
#[derive(Debug, Deserialize)]
pub struct ShoppingItemListQuery {
    /// Filter by completion status.
    pub completed: Option<bool>,
}

/// GET /shopping-items/{user_id}
///
/// List a user's shopping items, optionally filtered by completion.
pub async fn list_shopping_items(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Query(params): Query<ShoppingItemListQuery>,
) -> AppResult<Json<Vec<ShoppingItem>>> {
    let items = ShoppingItemRepo::list_for_user(&state.pool, user_id, params.completed).await?;
    Ok(Json(items))
}

/// PUT /shopping-items/{item_id}
///
/// Partially update a shopping item; only supplied fields change.
pub async fn update_shopping_item(
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<UpdateShoppingItem>,
) -> AppResult<Json<ShoppingItem>> {
    let item = ShoppingItemRepo::update(&state.pool, item_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Shopping item",
            id: item_id,
        }))?;
    Ok(Json(item))
}

/// DELETE /shopping-items/{item_id}
///
/// Delete a shopping item. Returns 204 on success.
pub async fn delete_shopping_item(
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ShoppingItemRepo::delete(&state.pool, item_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Shopping item",
            id: item_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
