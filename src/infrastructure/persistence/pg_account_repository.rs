//! PostgreSQL implementation of the account repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Account, NewAccount};
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;

/// PostgreSQL repository for account storage.
pub struct PgAccountRepository {
    pool: Arc<PgPool>,
}

impl PgAccountRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError> {
        let account = sqlx::query_as::<_, Account>(
            "INSERT INTO accounts (id, username, first_name, last_name)
             VALUES ($1, $2, $3, $4)
             RETURNING id, username, first_name, last_name",
        )
        .bind(&new_account.id)
        .bind(&new_account.username)
        .bind(&new_account.first_name)
        .bind(&new_account.last_name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(account)
    }
}
