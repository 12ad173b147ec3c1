//! Handlers for the `/calendar-events` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use offload_core::error::CoreError;
use offload_core::types::DbId;
use offload_db::models::calendar_event::{CalendarEvent, UpdateCalendarEvent};
use offload_db::repositories::CalendarEventRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /calendar-events/{user_id}`.
///
/// Both bounds are inclusive `YYYY-MM-DD` dates.
#[derive(Debug, Deserialize)]
pub struct CalendarEventListQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// GET /calendar-events/{user_id}
///
/// List a user's events within an optional date range, ordered by
/// (event_date, event_time).
pub async fn list_calendar_events(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Query(params): Query<CalendarEventListQuery>,
) -> AppResult<Json<Vec<CalendarEvent>>> {
    let events = CalendarEventRepo::list_for_user(
        &state.pool,
        user_id,
        params.start_date,
        params.end_date,
    )
    .await?;
    Ok(Json(events))
}

/// PUT /calendar-events/{event_id}
///
/// Partially update a calendar event; only supplied fields change.
pub async fn update_calendar_event(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
    Json(input): Json<UpdateCalendarEvent>,
) -> AppResult<Json<CalendarEvent>> {
    let changes = input.changes()?;
    let event = CalendarEventRepo::update(&state.pool, event_id, &changes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Calendar event",
            id: event_id,
        }))?;
    Ok(Json(event))
}

/// DELETE /calendar-events/{event_id}
///
/// Delete a calendar event. Returns 204 on success.
pub async fn delete_calendar_event(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CalendarEventRepo::delete(&state.pool, event_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Calendar event",
            id: event_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
