//! Command/query handlers.
//!
//! One handler per request type. Each accepts a validated request, performs
//! at most one collaborator call (store or rental-data client), and maps the
//! result into a response envelope.

pub mod create_account;
pub mod create_favorite;
pub mod get_favorites;
pub mod get_rental_detail;
pub mod search_rentals;

pub use create_account::CreateAccountHandler;
pub use create_favorite::CreateFavoriteHandler;
pub use get_favorites::GetFavoritesHandler;
pub use get_rental_detail::GetRentalDetailHandler;
pub use search_rentals::SearchRentalsHandler;
