//! Transactional persistence of an extracted brain dump.

use offload_core::datetime::{parse_date, parse_time};
use offload_core::error::CoreError;
use offload_core::extraction::ExtractedBrainDump;
use offload_core::types::DbId;

use sqlx::PgPool;

use crate::models::brain_dump::BrainDumpRecords;
use crate::models::task::{NewSubTask, NewTask, TaskWithSubtasks};
use crate::repositories::{CalendarEventRepo, ShoppingItemRepo, TaskRepo};

/// Errors from persisting an extraction result.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// A date or time string in the extracted data failed to parse.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The underlying insert failed.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Fans an extraction result out to the per-entity create paths.
pub struct BrainDumpRepo;

impl BrainDumpRepo {
    /// Persist every extracted item in a single transaction.
    ///
    /// All-or-nothing: any parse or insert failure rolls the whole dump
    /// back. Subtasks are stored only for tasks marked for decomposition,
    /// keeping the caller-assigned `order` values.
    pub async fn persist(
        pool: &PgPool,
        user_id: DbId,
        raw_input: &str,
        dump: &ExtractedBrainDump,
    ) -> Result<BrainDumpRecords, PersistError> {
        let mut tx = pool.begin().await?;

        let mut tasks = Vec::with_capacity(dump.tasks.len());
        for extracted in &dump.tasks {
            let new_task = NewTask {
                user_id,
                description: extracted.description.clone(),
                due_date: extracted.due_date.as_deref().map(parse_date).transpose()?,
                estimated_time_minutes: Some(extracted.estimated_time_minutes),
                raw_input: raw_input.to_string(),
            };
            let task = TaskRepo::insert_in(&mut tx, &new_task).await?;

            let subtasks = if extracted.should_decompose && !extracted.subtasks.is_empty() {
                let new_subtasks = extracted
                    .subtasks
                    .iter()
                    .map(|st| {
                        Ok(NewSubTask {
                            description: st.description.clone(),
                            sort_order: st.order,
                            estimated_time_minutes: st.estimated_time_minutes,
                            due_date: st.due_date.as_deref().map(parse_date).transpose()?,
                        })
                    })
                    .collect::<Result<Vec<_>, CoreError>>()?;
                TaskRepo::insert_subtasks_in(&mut tx, task.id, &new_subtasks).await?
            } else {
                Vec::new()
            };

            tasks.push(TaskWithSubtasks { task, subtasks });
        }

        let mut shopping_items = Vec::with_capacity(dump.shopping_items.len());
        for extracted in &dump.shopping_items {
            let item =
                ShoppingItemRepo::insert_in(&mut tx, user_id, &extracted.description, raw_input)
                    .await?;
            shopping_items.push(item);
        }

        let mut calendar_events = Vec::with_capacity(dump.calendar_events.len());
        for extracted in &dump.calendar_events {
            let event_date = parse_date(&extracted.event_date)?;
            let event_time = extracted.event_time.as_deref().map(parse_time).transpose()?;
            let event = CalendarEventRepo::insert_in(
                &mut tx,
                user_id,
                &extracted.description,
                event_date,
                event_time,
                raw_input,
            )
            .await?;
            calendar_events.push(event);
        }

        tx.commit().await?;

        tracing::info!(
            user_id,
            tasks = tasks.len(),
            shopping_items = shopping_items.len(),
            calendar_events = calendar_events.len(),
            "Persisted brain dump"
        );

        Ok(BrainDumpRecords {
            tasks,
            shopping_items,
            calendar_events,
        })
    }
}
