//! Handler for the create-account command.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::dto::STATUS_SUCCESS;
use crate::api::dto::account::{CreateAccountRequest, CreateAccountResponse};
use crate::application::dispatch::Handler;
use crate::domain::entities::NewAccount;
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;

/// Creates an account row with a freshly generated identifier.
pub struct CreateAccountHandler {
    accounts: Arc<dyn AccountRepository>,
}

impl CreateAccountHandler {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl Handler<CreateAccountRequest> for CreateAccountHandler {
    async fn handle(&self, request: CreateAccountRequest) -> Result<CreateAccountResponse, AppError> {
        let account = self
            .accounts
            .create(NewAccount {
                id: Uuid::new_v4().to_string(),
                username: request.username,
                first_name: request.first_name,
                last_name: request.last_name,
            })
            .await?;

        Ok(CreateAccountResponse {
            id: account.id,
            username: account.username,
            first_name: account.first_name,
            last_name: account.last_name,
            status: STATUS_SUCCESS.to_string(),
        })
    }
}
