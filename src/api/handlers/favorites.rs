//! Handlers for favorite endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::favorite::{
    CreateFavoriteRequest, CreateFavoriteResponse, GetFavoritesRequest, GetFavoritesResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Favorites a property for an account.
///
/// # Endpoint
///
/// `POST /favorites`
///
/// # Request Body
///
/// ```json
/// { "accountId": "…", "propertyId": "M7952539079" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when either field is missing or empty; the request
/// is never dispatched in that case.
pub async fn create_favorite_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateFavoriteRequest>,
) -> Result<Json<CreateFavoriteResponse>, AppError> {
    payload.validate()?;

    let response = state.dispatcher.send(payload).await?;

    Ok(Json(response))
}

/// Lists all favorites owned by an account.
///
/// # Endpoint
///
/// `GET /favorites/{account_id}`
///
/// An account with no favorites yields a 200 with an empty collection.
pub async fn get_favorites_handler(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<GetFavoritesResponse>, AppError> {
    let request = GetFavoritesRequest { account_id };
    request.validate()?;

    let response = state.dispatcher.send(request).await?;

    Ok(Json(response))
}
