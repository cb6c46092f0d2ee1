//! SQL templates for favorite persistence.
//!
//! Pure functions returning parameterized statement text. Templates are kept
//! as data rather than macro literals so the repository binds them at runtime
//! with `sqlx::query_as`.

/// Parameterized insert for a favorite.
///
/// Binds `$1` = id, `$2` = account id, `$3` = property id. The `RETURNING`
/// clause yields the inserted row so the caller can build its response
/// without a second round trip.
pub fn create_favorite_sql() -> &'static str {
    "INSERT INTO favorites (id, account_id, property_id)
     VALUES ($1, $2, $3)
     RETURNING id, account_id, property_id"
}

/// Parameterized select of all favorites owned by an account.
///
/// Binds `$1` = account id.
pub fn get_favorites_sql() -> &'static str {
    "SELECT id, account_id, property_id
     FROM favorites
     WHERE account_id = $1"
}
