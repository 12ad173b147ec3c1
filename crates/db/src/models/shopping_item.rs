//! Shopping item entity model and DTOs.

use offload_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `shopping_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShoppingItem {
    pub id: DbId,
    pub user_id: DbId,
    pub description: String,
    pub completed: bool,
    pub raw_input: String,
    pub created_at: Timestamp,
}

/// DTO for partially updating a shopping item. Omitted fields are untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateShoppingItem {
    pub description: Option<String>,
    pub completed: Option<bool>,
}
