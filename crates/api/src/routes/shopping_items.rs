//! Route definitions for the `/shopping-items` resource.
//!
//! The `/{id}` segment is a user ID for GET (list) and an item ID for
//! PUT/DELETE.

use axum::routing::get;
use axum::Router;

use crate::handlers::shopping_items;
use crate::state::AppState;

/// Routes mounted at `/shopping-items`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(shopping_items::list_shopping_items)
            .put(shopping_items::update_shopping_item)
            .delete(shopping_items::delete_shopping_item),
    )
}
