//! Handler for the get-favorites query.

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::dto::STATUS_SUCCESS;
use crate::api::dto::favorite::{FavoriteDto, GetFavoritesRequest, GetFavoritesResponse};
use crate::application::dispatch::Handler;
use crate::domain::repositories::FavoriteRepository;
use crate::error::AppError;

/// Lists the favorites owned by one account.
///
/// A pure read: no side effects, and an empty collection is a valid result.
pub struct GetFavoritesHandler {
    favorites: Arc<dyn FavoriteRepository>,
}

impl GetFavoritesHandler {
    pub fn new(favorites: Arc<dyn FavoriteRepository>) -> Self {
        Self { favorites }
    }
}

#[async_trait]
impl Handler<GetFavoritesRequest> for GetFavoritesHandler {
    async fn handle(&self, request: GetFavoritesRequest) -> Result<GetFavoritesResponse, AppError> {
        let favorites = self
            .favorites
            .list_by_account(&request.account_id)
            .await?
            .into_iter()
            .map(FavoriteDto::from)
            .collect();

        Ok(GetFavoritesResponse {
            favorites,
            status: STATUS_SUCCESS.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Favorite;
    use crate::domain::repositories::MockFavoriteRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn maps_stored_rows_into_response() {
        let mut favorites = MockFavoriteRepository::new();
        favorites
            .expect_list_by_account()
            .with(eq("account-1"))
            .times(1)
            .returning(|account_id| {
                Ok(vec![
                    Favorite::new("id-1".to_string(), account_id.to_string(), "M1".to_string()),
                    Favorite::new("id-2".to_string(), account_id.to_string(), "M2".to_string()),
                ])
            });

        let handler = GetFavoritesHandler::new(Arc::new(favorites));
        let response = handler
            .handle(GetFavoritesRequest {
                account_id: "account-1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.favorites.len(), 2);
        assert_eq!(response.favorites[0].property_id, "M1");
        assert_eq!(response.status, STATUS_SUCCESS);
    }

    #[tokio::test]
    async fn empty_collection_is_success_not_error() {
        let mut favorites = MockFavoriteRepository::new();
        favorites
            .expect_list_by_account()
            .times(1)
            .returning(|_| Ok(vec![]));

        let handler = GetFavoritesHandler::new(Arc::new(favorites));
        let response = handler
            .handle(GetFavoritesRequest {
                account_id: "account-without-favorites".to_string(),
            })
            .await
            .unwrap();

        assert!(response.favorites.is_empty());
        assert_eq!(response.status, STATUS_SUCCESS);
    }
}
