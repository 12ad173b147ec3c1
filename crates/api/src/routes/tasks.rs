//! Route definitions for the `/tasks` resource.
//!
//! The bare `/{id}` segment is a user ID for GET (list) and a task ID
//! for PUT/DELETE; the static `/task/{task_id}` path disambiguates
//! single-task reads.

use axum::routing::get;
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /{user_id}                        -> list_tasks
/// GET    /task/{task_id}                   -> get_task
/// PUT    /{task_id}                        -> update_task
/// DELETE /{task_id}                        -> delete_task
/// PUT    /{task_id}/subtasks/{subtask_id}  -> update_subtask
/// DELETE /{task_id}/subtasks/{subtask_id}  -> delete_subtask
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(tasks::list_tasks)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/task/{task_id}", get(tasks::get_task))
        .route(
            "/{task_id}/subtasks/{subtask_id}",
            axum::routing::put(tasks::update_subtask).delete(tasks::delete_subtask),
        )
}
