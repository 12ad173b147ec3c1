//! Repository for the `users` table.

use offload_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::User;

/// Column list for `users` queries.
const COLUMNS: &str = "id, email, first_name, created_at";

/// Provides access to user accounts.
pub struct UserRepo;

impl UserRepo {
    /// Fetch the user with the given email, creating one if absent.
    ///
    /// Idempotent: repeated calls with the same email return the same row.
    /// `first_name` is only applied on insert; an existing user's name is
    /// left untouched.
    pub async fn get_or_create(
        pool: &PgPool,
        email: &str,
        first_name: Option<&str>,
    ) -> Result<User, sqlx::Error> {
        // The no-op DO UPDATE makes the statement return the existing row
        // instead of nothing on conflict.
        let query = format!(
            "INSERT INTO users (email, first_name) \
             VALUES ($1, COALESCE($2, '')) \
             ON CONFLICT (email) DO UPDATE SET email = EXCLUDED.email \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(first_name)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
