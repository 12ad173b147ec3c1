//! Route definitions for the `/calendar-events` resource.
//!
//! The `/{id}` segment is a user ID for GET (list) and an event ID for
//! PUT/DELETE.

use axum::routing::get;
use axum::Router;

use crate::handlers::calendar_events;
use crate::state::AppState;

/// Routes mounted at `/calendar-events`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(calendar_events::list_calendar_events)
            .put(calendar_events::update_calendar_event)
            .delete(calendar_events::delete_calendar_event),
    )
}
