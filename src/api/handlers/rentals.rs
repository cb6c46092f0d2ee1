//! Handlers for rental lookup endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::rental::{
    GetRentalDetailRequest, GetRentalDetailResponse, SearchRentalsRequest, SearchRentalsResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Searches rental listings by city and state abbreviation.
///
/// # Endpoint
///
/// `GET /rentals?city=Chicago&state_code=IL`
///
/// The upstream document is returned verbatim in the `content` field.
///
/// # Errors
///
/// Returns 400 Bad Request when either parameter is missing or empty,
/// 502 Bad Gateway when the provider call fails.
pub async fn search_rentals_handler(
    State(state): State<AppState>,
    Query(request): Query<SearchRentalsRequest>,
) -> Result<Json<SearchRentalsResponse>, AppError> {
    request.validate()?;

    let response = state.dispatcher.send(request).await?;

    Ok(Json(response))
}

/// Fetches the detail document for one property.
///
/// # Endpoint
///
/// `GET /rentals/{property_id}`
pub async fn get_rental_detail_handler(
    State(state): State<AppState>,
    Path(property_id): Path<String>,
) -> Result<Json<GetRentalDetailResponse>, AppError> {
    let request = GetRentalDetailRequest { property_id };
    request.validate()?;

    let response = state.dispatcher.send(request).await?;

    Ok(Json(response))
}
