//! Route definitions, one module per resource.

pub mod auth;
pub mod brain_dumps;
pub mod calendar_events;
pub mod health;
pub mod shopping_items;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the full API route tree (mounted at the root, no version prefix).
///
/// ```text
/// /auth/login                                  POST (get-or-create)
/// /auth/signup                                 POST (get-or-create)
///
/// /brain-dumps/                                POST
///
/// /tasks/{user_id}                             GET  (list, ?completed=&sort_by=)
/// /tasks/task/{task_id}                        GET
/// /tasks/{task_id}                             PUT, DELETE
/// /tasks/{task_id}/subtasks/{subtask_id}       PUT, DELETE
///
/// /shopping-items/{user_id}                    GET  (list, ?completed=)
/// /shopping-items/{item_id}                    PUT, DELETE
///
/// /calendar-events/{user_id}                   GET  (list, ?start_date=&end_date=)
/// /calendar-events/{event_id}                  PUT, DELETE
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(brain_dumps::router())
        .nest("/tasks", tasks::router())
        .nest("/shopping-items", shopping_items::router())
        .nest("/calendar-events", calendar_events::router())
}
