//! Handlers for the `/tasks` resource and its subtask sub-paths.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use offload_core::error::CoreError;
use offload_core::types::DbId;
use offload_db::models::task::{SubTask, TaskWithSubtasks, UpdateSubTask, UpdateTask};
use offload_db::repositories::{TaskRepo, TaskSort};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /tasks/{user_id}`.
#[derive(Debug, Deserialize)]
pub struct TaskListQuery {
    /// Filter by completion status.
    pub completed: Option<bool>,
    /// `created_at` (default, newest first) or `due_date` (soonest first).
    pub sort_by: Option<String>,
}

/// GET /tasks/{user_id}
///
/// List a user's tasks with their subtasks, optionally filtered and sorted.
pub async fn list_tasks(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Query(params): Query<TaskListQuery>,
) -> AppResult<Json<Vec<TaskWithSubtasks>>> {
    let sort = match params.sort_by.as_deref() {
        None | Some("created_at") => TaskSort::CreatedAt,
        Some("due_date") => TaskSort::DueDate,
        Some(other) => {
            return Err(AppError::BadRequest(format!(
                "Unknown sort_by '{other}', expected created_at or due_date"
            )))
        }
    };

    let tasks = TaskRepo::list_for_user(&state.pool, user_id, params.completed, sort).await?;
    Ok(Json(tasks))
}

/// GET /tasks/task/{task_id}
///
/// Get a single task by ID with its subtasks.
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<Json<TaskWithSubtasks>> {
    let task = TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;
    Ok(Json(task))
}

/// PUT /tasks/{task_id}
///
/// Partially update a task; only supplied fields change.
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<TaskWithSubtasks>> {
    let changes = input.changes()?;
    let task = TaskRepo::update(&state.pool, task_id, &changes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;
    Ok(Json(task))
}

/// DELETE /tasks/{task_id}
///
/// Delete a task; its subtasks are cascade-deleted. Returns 204 on success.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TaskRepo::delete(&state.pool, task_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /tasks/{task_id}/subtasks/{subtask_id}
///
/// Partially update a subtask; 404 unless it belongs to the given task.
pub async fn update_subtask(
    State(state): State<AppState>,
    Path((task_id, subtask_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateSubTask>,
) -> AppResult<Json<SubTask>> {
    let changes = input.changes()?;
    let subtask = TaskRepo::update_subtask(&state.pool, task_id, subtask_id, &changes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Subtask",
            id: subtask_id,
        }))?;
    Ok(Json(subtask))
}

/// DELETE /tasks/{task_id}/subtasks/{subtask_id}
///
/// Delete a subtask; 404 unless it belongs to the given task.
pub async fn delete_subtask(
    State(state): State<AppState>,
    Path((task_id, subtask_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = TaskRepo::delete_subtask(&state.pool, task_id, subtask_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Subtask",
            id: subtask_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
