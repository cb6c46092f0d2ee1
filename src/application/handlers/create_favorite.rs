//! Handler for the create-favorite command.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::dto::STATUS_SUCCESS;
use crate::api::dto::favorite::{CreateFavoriteRequest, CreateFavoriteResponse};
use crate::application::dispatch::Handler;
use crate::domain::entities::NewFavorite;
use crate::domain::repositories::FavoriteRepository;
use crate::error::AppError;

/// Persists a favorite with a freshly generated identifier.
///
/// The insert statement returns the stored row, so the response is built from
/// a single store round trip.
pub struct CreateFavoriteHandler {
    favorites: Arc<dyn FavoriteRepository>,
}

impl CreateFavoriteHandler {
    pub fn new(favorites: Arc<dyn FavoriteRepository>) -> Self {
        Self { favorites }
    }
}

#[async_trait]
impl Handler<CreateFavoriteRequest> for CreateFavoriteHandler {
    async fn handle(
        &self,
        request: CreateFavoriteRequest,
    ) -> Result<CreateFavoriteResponse, AppError> {
        let favorite = self
            .favorites
            .create(NewFavorite {
                id: Uuid::new_v4().to_string(),
                account_id: request.account_id,
                property_id: request.property_id,
            })
            .await?;

        Ok(CreateFavoriteResponse {
            id: favorite.id,
            account_id: favorite.account_id,
            property_id: favorite.property_id,
            status: STATUS_SUCCESS.to_string(),
        })
    }
}
