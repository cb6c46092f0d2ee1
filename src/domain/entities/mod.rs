//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Account`] - A registered user account
//! - [`Favorite`] - A property favorited by an account
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewAccount` and `NewFavorite` carry the data for new records.

pub mod account;
pub mod favorite;

pub use account::{Account, NewAccount};
pub use favorite::{Favorite, NewFavorite};
