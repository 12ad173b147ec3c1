//! Task and subtask entity models and DTOs.

use chrono::NaiveDate;
use offload_core::datetime::parse_date;
use offload_core::error::CoreError;
use offload_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub user_id: DbId,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub estimated_time_minutes: Option<i32>,
    pub completed: bool,
    pub raw_input: String,
    pub created_at: Timestamp,
}

/// A row from the `subtasks` table.
///
/// The `sort_order` column serializes as `order` on the wire.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubTask {
    pub id: DbId,
    pub parent_task_id: DbId,
    pub description: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub estimated_time_minutes: Option<i32>,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub created_at: Timestamp,
}

/// A task enriched with its subtasks, ordered by `sort_order`.
#[derive(Debug, Clone, Serialize)]
pub struct TaskWithSubtasks {
    #[serde(flatten)]
    pub task: Task,
    pub subtasks: Vec<SubTask>,
}

/// Fields for inserting a new task.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub user_id: DbId,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub estimated_time_minutes: Option<i32>,
    pub raw_input: String,
}

/// Fields for inserting a new subtask under a task.
#[derive(Debug, Clone)]
pub struct NewSubTask {
    pub description: String,
    pub sort_order: i32,
    pub estimated_time_minutes: Option<i32>,
    pub due_date: Option<NaiveDate>,
}

/// DTO for partially updating a task. Omitted fields are untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateTask {
    pub description: Option<String>,
    /// `YYYY-MM-DD`.
    pub due_date: Option<String>,
    pub estimated_time_minutes: Option<i32>,
    pub completed: Option<bool>,
}

/// Typed change set produced from [`UpdateTask`].
#[derive(Debug, Clone)]
pub struct TaskChanges {
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub estimated_time_minutes: Option<i32>,
    pub completed: Option<bool>,
}

impl UpdateTask {
    /// Convert the wire DTO into a typed change set, parsing the date string.
    pub fn changes(&self) -> Result<TaskChanges, CoreError> {
        Ok(TaskChanges {
            description: self.description.clone(),
            due_date: self.due_date.as_deref().map(parse_date).transpose()?,
            estimated_time_minutes: self.estimated_time_minutes,
            completed: self.completed,
        })
    }
}

/// DTO for partially updating a subtask. Omitted fields are untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateSubTask {
    pub description: Option<String>,
    /// `YYYY-MM-DD`.
    pub due_date: Option<String>,
    pub estimated_time_minutes: Option<i32>,
    pub completed: Option<bool>,
}

/// Typed change set produced from [`UpdateSubTask`].
#[derive(Debug, Clone)]
pub struct SubTaskChanges {
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub estimated_time_minutes: Option<i32>,
    pub completed: Option<bool>,
}

impl UpdateSubTask {
    /// Convert the wire DTO into a typed change set, parsing the date string.
    pub fn changes(&self) -> Result<SubTaskChanges, CoreError> {
        Ok(SubTaskChanges {
            description: self.description.clone(),
            due_date: self.due_date.as_deref().map(parse_date).transpose()?,
            estimated_time_minutes: self.estimated_time_minutes,
            completed: self.completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::UpdateTask;

    #[test]
    fn changes_parse_due_date_string() {
        let input: UpdateTask = serde_json::from_value(serde_json::json!({
            "due_date": "2026-04-01",
            "completed": true
        }))
        .unwrap();
        let changes = input.changes().unwrap();
        assert_eq!(
            changes.due_date,
            Some(chrono::NaiveDate::from_ymd_opt(2026, 4, 1).unwrap())
        );
        assert_eq!(changes.completed, Some(true));
        assert!(changes.description.is_none());
    }

    #[test]
    fn changes_reject_bad_due_date() {
        let input: UpdateTask =
            serde_json::from_value(serde_json::json!({"due_date": "next tuesday"})).unwrap();
        assert!(input.changes().is_err());
    }
}
