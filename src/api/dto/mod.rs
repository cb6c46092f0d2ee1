//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Every response envelope carries a `status` field.

pub mod account;
pub mod favorite;
pub mod health;
pub mod rental;

/// Envelope status for a completed dispatch.
pub const STATUS_SUCCESS: &str = "Success";
