//! DTOs for rental lookup endpoints.
//!
//! Query parameter names (`city`, `state_code`) match the upstream provider's
//! contract, so these structs deserialize without renaming.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to search rental listings by city and state abbreviation.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchRentalsRequest {
    /// Defaults to empty when absent so a missing parameter fails validation
    /// with 400 rather than a query-deserialization rejection.
    #[serde(default)]
    #[validate(length(min = 1, message = "city must not be empty"))]
    pub city: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "state_code must not be empty"))]
    pub state_code: String,
}

/// Response carrying the raw upstream listings document.
#[derive(Debug, Serialize)]
pub struct SearchRentalsResponse {
    pub content: String,
    pub status: String,
}

/// Request to fetch the detail document for one property.
///
/// Built by the controller from the path parameter.
#[derive(Debug, Deserialize, Validate)]
pub struct GetRentalDetailRequest {
    #[validate(length(min = 1, message = "property_id must not be empty"))]
    pub property_id: String,
}

/// Response carrying the raw upstream detail document.
#[derive(Debug, Serialize)]
pub struct GetRentalDetailResponse {
    pub content: String,
    pub status: String,
}
