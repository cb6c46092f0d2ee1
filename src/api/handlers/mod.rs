//! HTTP request handlers (controllers).
//!
//! Each handler validates the request DTO, dispatches it through the
//! command/query dispatcher, and wraps the handler's response envelope in a
//! 200 result. Validation failures short-circuit with 400 before dispatch.

pub mod accounts;
pub mod favorites;
pub mod health;
pub mod rentals;

pub use accounts::create_account_handler;
pub use favorites::{create_favorite_handler, get_favorites_handler};
pub use health::health_handler;
pub use rentals::{get_rental_detail_handler, search_rentals_handler};
