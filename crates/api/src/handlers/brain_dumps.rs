//! Handler for the `/brain-dumps` resource: the AI integration glue.

use axum::extract::State;
use axum::Json;
use offload_core::error::CoreError;
use offload_core::types::DbId;
use offload_db::models::brain_dump::BrainDumpRecords;
use offload_db::repositories::{BrainDumpRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body for `POST /brain-dumps/`.
#[derive(Debug, Deserialize)]
pub struct BrainDumpRequest {
    /// Free-form user text to classify.
    pub text: String,
    pub user_id: DbId,
}

/// POST /brain-dumps/
///
/// Hand the text to the extraction service, persist every extracted item
/// in one transaction, and return the created records grouped by category.
pub async fn process_brain_dump(
    State(state): State<AppState>,
    Json(input): Json<BrainDumpRequest>,
) -> AppResult<Json<BrainDumpRecords>> {
    if input.text.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Brain dump text must not be empty".to_string(),
        ));
    }

    let user = UserRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.user_id,
        }))?;

    let extracted = state.extractor.extract(&input.text).await?;
    let records = BrainDumpRepo::persist(&state.pool, user.id, &input.text, &extracted).await?;

    Ok(Json(records))
}
