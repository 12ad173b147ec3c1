//! Repository for the `shopping_items` table.

use offload_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::shopping_item::{ShoppingItem, UpdateShoppingItem};

/// Column list for `shopping_items` queries.
const COLUMNS: &str = "id, user_id, description, completed, raw_input, created_at";

/// Provides CRUD operations for shopping items.
pub struct ShoppingItemRepo;

impl ShoppingItemRepo {
    /// Insert a new shopping item, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        description: &str,
        raw_input: &str,
    ) -> Result<ShoppingItem, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let item = Self::insert_in(&mut tx, user_id, description, raw_input).await?;
        tx.commit().await?;
        Ok(item)
    }

    /// Insert a shopping item inside an existing transaction.
    pub(crate) async fn insert_in(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
        description: &str,
        raw_input: &str,
    ) -> Result<ShoppingItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO shopping_items (user_id, description, raw_input) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShoppingItem>(&query)
            .bind(user_id)
            .bind(description)
            .bind(raw_input)
            .fetch_one(&mut **tx)
            .await
    }

    /// List a user's shopping items, newest first.
    ///
    /// `completed` filters by completion status when set.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        completed: Option<bool>,
    ) -> Result<Vec<ShoppingItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shopping_items \
             WHERE user_id = $1 AND ($2::boolean IS NULL OR completed = $2) \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ShoppingItem>(&query)
            .bind(user_id)
            .bind(completed)
            .fetch_all(pool)
            .await
    }

    /// Update a shopping item. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShoppingItem,
    ) -> Result<Option<ShoppingItem>, sqlx::Error> {
        let query = format!(
            "UPDATE shopping_items SET \
                description = COALESCE($2, description), \
                completed = COALESCE($3, completed) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShoppingItem>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.completed)
            .fetch_optional(pool)
            .await
    }

    /// Delete a shopping item by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shopping_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
