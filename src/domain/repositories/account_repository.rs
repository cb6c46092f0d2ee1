//! Repository trait for account data access.

use crate::domain::entities::{Account, NewAccount};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing user accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAccountRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Inserts a new account and returns the persisted row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors, including unique
    /// violations on the username.
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError>;
}
