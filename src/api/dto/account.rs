//! DTOs for account endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a user account.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    /// Defaults to empty when absent so a missing field fails validation
    /// with 400 rather than a body-deserialization rejection.
    #[serde(default)]
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "firstName must not be empty"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "lastName must not be empty"))]
    pub last_name: String,
}

/// Response carrying the persisted account.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountResponse {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub status: String,
}
