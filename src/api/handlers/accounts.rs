//! Handlers for account endpoints.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::account::{CreateAccountRequest, CreateAccountResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user account.
///
/// # Endpoint
///
/// `POST /accounts`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails; the request is never
/// dispatched in that case.
pub async fn create_account_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateAccountRequest>,
) -> Result<Json<CreateAccountResponse>, AppError> {
    payload.validate()?;

    let response = state.dispatcher.send(payload).await?;

    Ok(Json(response))
}
