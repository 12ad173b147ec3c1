//! Handlers for the `/auth` resource.
//!
//! There is no password or session: identity is email-only, and both
//! endpoints are an idempotent get-or-create.

use axum::extract::State;
use axum::Json;
use offload_db::models::user::User;
use offload_db::repositories::UserRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
}

/// Body for `POST /auth/signup`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,
    pub first_name: String,
}

/// POST /auth/login
///
/// Email-only login; creates the user if the email is unknown.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<User>> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let user = UserRepo::get_or_create(&state.pool, &input.email, None).await?;
    Ok(Json(user))
}

/// POST /auth/signup
///
/// Create a user with email and first name. Repeating with a known email
/// returns the existing user unchanged.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<Json<User>> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let user =
        UserRepo::get_or_create(&state.pool, &input.email, Some(&input.first_name)).await?;
    Ok(Json(user))
}
