//! DTOs for favorite endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Favorite;

/// Request to favorite a property for an account.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavoriteRequest {
    /// Defaults to empty when absent so a missing field fails validation
    /// with 400 rather than a body-deserialization rejection.
    #[serde(default)]
    #[validate(length(min = 1, message = "accountId must not be empty"))]
    pub account_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "propertyId must not be empty"))]
    pub property_id: String,
}

/// Response carrying the persisted favorite.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavoriteResponse {
    pub id: String,
    pub account_id: String,
    pub property_id: String,
    pub status: String,
}

/// Request to list all favorites owned by an account.
///
/// Built by the controller from the path parameter.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GetFavoritesRequest {
    #[validate(length(min = 1, message = "accountId must not be empty"))]
    pub account_id: String,
}

/// A favorite as serialized in list responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDto {
    pub id: String,
    pub account_id: String,
    pub property_id: String,
}

impl From<Favorite> for FavoriteDto {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id,
            account_id: favorite.account_id,
            property_id: favorite.property_id,
        }
    }
}

/// Response carrying the favorites of one account.
///
/// An empty collection is a valid success response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFavoritesResponse {
    pub favorites: Vec<FavoriteDto>,
    pub status: String,
}
