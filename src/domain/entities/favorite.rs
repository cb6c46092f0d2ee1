//! Favorite entity representing a saved property for an account.

use sqlx::FromRow;

/// A property favorited by an account.
///
/// Immutable once created; there are no update or delete operations.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Favorite {
    pub id: String,
    pub account_id: String,
    pub property_id: String,
}

impl Favorite {
    /// Creates a new Favorite instance.
    pub fn new(id: String, account_id: String, property_id: String) -> Self {
        Self {
            id,
            account_id,
            property_id,
        }
    }
}

/// Input data for creating a new favorite.
///
/// The identifier is generated by the handler before the insert so the
/// response can be built from a single round trip.
#[derive(Debug, Clone)]
pub struct NewFavorite {
    pub id: String,
    pub account_id: String,
    pub property_id: String,
}
