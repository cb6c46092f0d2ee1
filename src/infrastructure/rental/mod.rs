//! Upstream rental-data provider integration.
//!
//! - [`client`] - the [`RentalDataClient`] trait consumed by handlers
//! - [`http_client`] - reqwest-backed implementation

pub mod client;
pub mod http_client;

pub use client::RentalDataClient;
pub use http_client::HttpRentalDataClient;

#[cfg(test)]
pub use client::MockRentalDataClient;
