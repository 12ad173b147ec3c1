//! Repository for the `tasks` and `subtasks` tables.

use offload_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::task::{
    NewSubTask, NewTask, SubTask, SubTaskChanges, Task, TaskChanges, TaskWithSubtasks,
};

/// Column list for `tasks` queries.
const COLUMNS: &str =
    "id, user_id, description, due_date, estimated_time_minutes, completed, raw_input, created_at";

/// Column list for `subtasks` queries.
const SUBTASK_COLUMNS: &str = "id, parent_task_id, description, sort_order, \
     estimated_time_minutes, due_date, completed, created_at";

/// Sort order for task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSort {
    /// Newest first (default).
    CreatedAt,
    /// Soonest due first; tasks without a due date sort last.
    DueDate,
}

/// Provides CRUD operations for tasks and their subtasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewTask) -> Result<Task, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let task = Self::insert_in(&mut tx, input).await?;
        tx.commit().await?;
        Ok(task)
    }

    /// Insert a task inside an existing transaction.
    pub(crate) async fn insert_in(
        tx: &mut Transaction<'_, Postgres>,
        input: &NewTask,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (user_id, description, due_date, estimated_time_minutes, raw_input) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.user_id)
            .bind(&input.description)
            .bind(input.due_date)
            .bind(input.estimated_time_minutes)
            .bind(&input.raw_input)
            .fetch_one(&mut **tx)
            .await
    }

    /// Insert subtasks under a task, returning the created rows in input order.
    pub async fn create_subtasks(
        pool: &PgPool,
        parent_task_id: DbId,
        subtasks: &[NewSubTask],
    ) -> Result<Vec<SubTask>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let created = Self::insert_subtasks_in(&mut tx, parent_task_id, subtasks).await?;
        tx.commit().await?;
        Ok(created)
    }

    /// Insert subtasks inside an existing transaction.
    pub(crate) async fn insert_subtasks_in(
        tx: &mut Transaction<'_, Postgres>,
        parent_task_id: DbId,
        subtasks: &[NewSubTask],
    ) -> Result<Vec<SubTask>, sqlx::Error> {
        let query = format!(
            "INSERT INTO subtasks \
                (parent_task_id, description, sort_order, estimated_time_minutes, due_date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {SUBTASK_COLUMNS}"
        );
        let mut created = Vec::with_capacity(subtasks.len());
        for subtask in subtasks {
            let row = sqlx::query_as::<_, SubTask>(&query)
                .bind(parent_task_id)
                .bind(&subtask.description)
                .bind(subtask.sort_order)
                .bind(subtask.estimated_time_minutes)
                .bind(subtask.due_date)
                .fetch_one(&mut **tx)
                .await?;
            created.push(row);
        }
        Ok(created)
    }

    /// Find a task by ID, enriched with its ordered subtasks.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TaskWithSubtasks>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        match task {
            Some(task) => {
                let subtasks = Self::subtasks_for_task(pool, task.id).await?;
                Ok(Some(TaskWithSubtasks { task, subtasks }))
            }
            None => Ok(None),
        }
    }

    /// List a user's tasks with their subtasks.
    ///
    /// `completed` filters by completion status when set.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        completed: Option<bool>,
        sort: TaskSort,
    ) -> Result<Vec<TaskWithSubtasks>, sqlx::Error> {
        let order = match sort {
            TaskSort::CreatedAt => "created_at DESC",
            TaskSort::DueDate => "due_date ASC NULLS LAST",
        };
        let query = format!(
            "SELECT {COLUMNS} FROM tasks \
             WHERE user_id = $1 AND ($2::boolean IS NULL OR completed = $2) \
             ORDER BY {order}"
        );
        let tasks = sqlx::query_as::<_, Task>(&query)
            .bind(user_id)
            .bind(completed)
            .fetch_all(pool)
            .await?;

        let mut result = Vec::with_capacity(tasks.len());
        for task in tasks {
            let subtasks = Self::subtasks_for_task(pool, task.id).await?;
            result.push(TaskWithSubtasks { task, subtasks });
        }
        Ok(result)
    }

    /// Subtasks of a task, ordered by their checklist position.
    pub async fn subtasks_for_task(
        pool: &PgPool,
        task_id: DbId,
    ) -> Result<Vec<SubTask>, sqlx::Error> {
        let query = format!(
            "SELECT {SUBTASK_COLUMNS} FROM subtasks \
             WHERE parent_task_id = $1 \
             ORDER BY sort_order ASC"
        );
        sqlx::query_as::<_, SubTask>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `changes` are applied.
    ///
    /// Returns the updated task with its subtasks, or `None` if no row
    /// with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &TaskChanges,
    ) -> Result<Option<TaskWithSubtasks>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET \
                description = COALESCE($2, description), \
                due_date = COALESCE($3, due_date), \
                estimated_time_minutes = COALESCE($4, estimated_time_minutes), \
                completed = COALESCE($5, completed) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&changes.description)
            .bind(changes.due_date)
            .bind(changes.estimated_time_minutes)
            .bind(changes.completed)
            .fetch_optional(pool)
            .await?;
        match task {
            Some(task) => {
                let subtasks = Self::subtasks_for_task(pool, task.id).await?;
                Ok(Some(TaskWithSubtasks { task, subtasks }))
            }
            None => Ok(None),
        }
    }

    /// Delete a task by ID. Subtasks go with it via `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Update a subtask, scoped to its parent task.
    ///
    /// Returns `None` if the subtask does not exist under the given task.
    pub async fn update_subtask(
        pool: &PgPool,
        task_id: DbId,
        subtask_id: DbId,
        changes: &SubTaskChanges,
    ) -> Result<Option<SubTask>, sqlx::Error> {
        let query = format!(
            "UPDATE subtasks SET \
                description = COALESCE($3, description), \
                due_date = COALESCE($4, due_date), \
                estimated_time_minutes = COALESCE($5, estimated_time_minutes), \
                completed = COALESCE($6, completed) \
             WHERE id = $1 AND parent_task_id = $2 \
             RETURNING {SUBTASK_COLUMNS}"
        );
        sqlx::query_as::<_, SubTask>(&query)
            .bind(subtask_id)
            .bind(task_id)
            .bind(&changes.description)
            .bind(changes.due_date)
            .bind(changes.estimated_time_minutes)
            .bind(changes.completed)
            .fetch_optional(pool)
            .await
    }

    /// Delete a subtask, scoped to its parent task.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete_subtask(
        pool: &PgPool,
        task_id: DbId,
        subtask_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subtasks WHERE id = $1 AND parent_task_id = $2")
            .bind(subtask_id)
            .bind(task_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
