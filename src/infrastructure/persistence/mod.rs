//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgAccountRepository`] - Account storage
//! - [`PgFavoriteRepository`] - Favorite storage and retrieval
//!
//! The favorite statements live in [`favorite_sql`] as parameterized templates.

pub mod favorite_sql;
pub mod pg_account_repository;
pub mod pg_favorite_repository;

pub use pg_account_repository::PgAccountRepository;
pub use pg_favorite_repository::PgFavoriteRepository;
