//! Repository trait for favorite data access.

use crate::domain::entities::{Favorite, NewFavorite};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing property favorites.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgFavoriteRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Inserts a new favorite and returns the persisted row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn create(&self, new_favorite: NewFavorite) -> Result<Favorite, AppError>;

    /// Lists all favorites owned by the given account.
    ///
    /// An account with no favorites yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list_by_account(&self, account_id: &str) -> Result<Vec<Favorite>, AppError>;
}
