//! Rental-data client trait.

use crate::error::AppError;
use async_trait::async_trait;

/// Client interface for the upstream rental-data provider.
///
/// Both operations return the raw response body verbatim; no parsing or
/// shape validation happens on this side.
///
/// # Implementations
///
/// - [`crate::infrastructure::rental::HttpRentalDataClient`] - reqwest-backed
///   implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RentalDataClient: Send + Sync {
    /// Fetches rental listings for a city and state abbreviation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport failure or a non-success
    /// HTTP status.
    async fn fetch_rentals_by_city_state(
        &self,
        city: &str,
        state_code: &str,
    ) -> Result<String, AppError>;

    /// Fetches the detail document for a single property.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport failure or a non-success
    /// HTTP status.
    async fn fetch_rental(&self, property_id: &str) -> Result<String, AppError>;
}
