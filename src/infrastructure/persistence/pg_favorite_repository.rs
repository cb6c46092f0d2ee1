//! PostgreSQL implementation of the favorite repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Favorite, NewFavorite};
use crate::domain::repositories::FavoriteRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::favorite_sql;

/// PostgreSQL repository for favorite storage and retrieval.
///
/// Statement text comes from [`favorite_sql`]; parameters are always bound,
/// never interpolated.
pub struct PgFavoriteRepository {
    pool: Arc<PgPool>,
}

impl PgFavoriteRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    async fn create(&self, new_favorite: NewFavorite) -> Result<Favorite, AppError> {
        let favorite = sqlx::query_as::<_, Favorite>(favorite_sql::create_favorite_sql())
            .bind(&new_favorite.id)
            .bind(&new_favorite.account_id)
            .bind(&new_favorite.property_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(favorite)
    }

    async fn list_by_account(&self, account_id: &str) -> Result<Vec<Favorite>, AppError> {
        let favorites = sqlx::query_as::<_, Favorite>(favorite_sql::get_favorites_sql())
            .bind(account_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(favorites)
    }
}
