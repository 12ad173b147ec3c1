//! Repository for the `calendar_events` table.

use chrono::{NaiveDate, NaiveTime};
use offload_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::calendar_event::{CalendarEvent, CalendarEventChanges};

/// Column list for `calendar_events` queries.
const COLUMNS: &str = "id, user_id, description, event_date, event_time, raw_input, created_at";

/// Provides CRUD operations for calendar events.
pub struct CalendarEventRepo;

impl CalendarEventRepo {
    /// Insert a new calendar event, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        description: &str,
        event_date: NaiveDate,
        event_time: Option<NaiveTime>,
        raw_input: &str,
    ) -> Result<CalendarEvent, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let event =
            Self::insert_in(&mut tx, user_id, description, event_date, event_time, raw_input)
                .await?;
        tx.commit().await?;
        Ok(event)
    }

    /// Insert a calendar event inside an existing transaction.
    pub(crate) async fn insert_in(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
        description: &str,
        event_date: NaiveDate,
        event_time: Option<NaiveTime>,
        raw_input: &str,
    ) -> Result<CalendarEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO calendar_events (user_id, description, event_date, event_time, raw_input) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(user_id)
            .bind(description)
            .bind(event_date)
            .bind(event_time)
            .bind(raw_input)
            .fetch_one(&mut **tx)
            .await
    }

    /// List a user's calendar events, ordered by (event_date, event_time).
    ///
    /// `start_date` and `end_date` bound `event_date` inclusively when set.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<CalendarEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM calendar_events \
             WHERE user_id = $1 \
               AND ($2::date IS NULL OR event_date >= $2) \
               AND ($3::date IS NULL OR event_date <= $3) \
             ORDER BY event_date ASC, event_time ASC"
        );
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(user_id)
            .bind(start_date)
            .bind(end_date)
            .fetch_all(pool)
            .await
    }

    /// Update a calendar event. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &CalendarEventChanges,
    ) -> Result<Option<CalendarEvent>, sqlx::Error> {
        let query = format!(
            "UPDATE calendar_events SET \
                description = COALESCE($2, description), \
                event_date = COALESCE($3, event_date), \
                event_time = COALESCE($4, event_time) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(id)
            .bind(&changes.description)
            .bind(changes.event_date)
            .bind(changes.event_time)
            .fetch_optional(pool)
            .await
    }

    /// Delete a calendar event by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM calendar_events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
