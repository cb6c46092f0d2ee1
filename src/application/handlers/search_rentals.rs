//! Handler for the search-rentals query.

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::dto::STATUS_SUCCESS;
use crate::api::dto::rental::{SearchRentalsRequest, SearchRentalsResponse};
use crate::application::dispatch::Handler;
use crate::error::AppError;
use crate::infrastructure::rental::RentalDataClient;

/// Proxies a city/state listing search to the rental-data provider.
///
/// The upstream body is passed through verbatim; no shape validation.
pub struct SearchRentalsHandler {
    client: Arc<dyn RentalDataClient>,
}

impl SearchRentalsHandler {
    pub fn new(client: Arc<dyn RentalDataClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Handler<SearchRentalsRequest> for SearchRentalsHandler {
    async fn handle(&self, request: SearchRentalsRequest) -> Result<SearchRentalsResponse, AppError> {
        let content = self
            .client
            .fetch_rentals_by_city_state(&request.city, &request.state_code)
            .await?;

        Ok(SearchRentalsResponse {
            content,
            status: STATUS_SUCCESS.to_string(),
        })
    }
}
