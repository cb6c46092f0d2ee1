//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in `crate::infrastructure::persistence`.
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod account_repository;
pub mod favorite_repository;

pub use account_repository::AccountRepository;
pub use favorite_repository::FavoriteRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use favorite_repository::MockFavoriteRepository;
