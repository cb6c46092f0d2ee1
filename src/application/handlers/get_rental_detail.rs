//! Handler for the get-rental-detail query.

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::dto::STATUS_SUCCESS;
use crate::api::dto::rental::{GetRentalDetailRequest, GetRentalDetailResponse};
use crate::application::dispatch::Handler;
use crate::error::AppError;
use crate::infrastructure::rental::RentalDataClient;

/// Proxies a property detail lookup to the rental-data provider.
pub struct GetRentalDetailHandler {
    client: Arc<dyn RentalDataClient>,
}

impl GetRentalDetailHandler {
    pub fn new(client: Arc<dyn RentalDataClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Handler<GetRentalDetailRequest> for GetRentalDetailHandler {
    async fn handle(
        &self,
        request: GetRentalDetailRequest,
    ) -> Result<GetRentalDetailResponse, AppError> {
        let content = self.client.fetch_rental(&request.property_id).await?;

        Ok(GetRentalDetailResponse {
            content,
            status: STATUS_SUCCESS.to_string(),
        })
    }
}
