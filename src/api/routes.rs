//! API route configuration.

use crate::api::handlers::{
    create_account_handler, create_favorite_handler, get_favorites_handler,
    get_rental_detail_handler, search_rentals_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /accounts`                - Create a user account
/// - `POST /favorites`               - Favorite a property for an account
/// - `GET  /favorites/{account_id}`  - List favorites owned by an account
/// - `GET  /rentals`                 - Search rental listings by city/state
/// - `GET  /rentals/{property_id}`   - Fetch detail for one property
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", post(create_account_handler))
        .route("/favorites", post(create_favorite_handler))
        .route("/favorites/{account_id}", get(get_favorites_handler))
        .route("/rentals", get(search_rentals_handler))
        .route("/rentals/{property_id}", get(get_rental_detail_handler))
}
