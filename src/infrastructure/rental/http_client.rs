//! reqwest-backed implementation of the rental-data client.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::error::AppError;
use crate::infrastructure::rental::RentalDataClient;

/// Fixed paging parameters for the list-for-rent search.
const LIST_LIMIT: &str = "200";
const LIST_OFFSET: &str = "0";
const LIST_SORT: &str = "relevance";

/// HTTP client for the upstream rental-data provider.
///
/// Holds a shared [`reqwest::Client`] (the connection pool is managed by
/// reqwest), the provider base URL, and an optional API key sent as the
/// `x-api-key` header.
///
/// No retry, circuit breaking, or caching: a failed call surfaces as
/// [`AppError::Upstream`] and the request is over.
pub struct HttpRentalDataClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpRentalDataClient {
    /// Creates a client scoped to one provider base URL.
    pub fn new(http: Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Issues a GET and returns the raw body text.
    async fn get_text(&self, path: &str, query: &[(&str, &str)]) -> Result<String, AppError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);

        let mut request = self.http.get(&url).query(query);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await.map_err(|e| {
            AppError::upstream(
                "Rental-data provider unreachable",
                json!({ "path": path, "cause": e.to_string() }),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream(
                "Rental-data provider returned an error status",
                json!({ "path": path, "status": status.as_u16() }),
            ));
        }

        response.text().await.map_err(|e| {
            AppError::upstream(
                "Failed to read rental-data provider response",
                json!({ "path": path, "cause": e.to_string() }),
            )
        })
    }
}

#[async_trait]
impl RentalDataClient for HttpRentalDataClient {
    async fn fetch_rentals_by_city_state(
        &self,
        city: &str,
        state_code: &str,
    ) -> Result<String, AppError> {
        self.get_text(
            "/properties/v2/list-for-rent",
            &[
                ("city", city),
                ("state_code", state_code),
                ("limit", LIST_LIMIT),
                ("offset", LIST_OFFSET),
                ("sort", LIST_SORT),
            ],
        )
        .await
    }

    async fn fetch_rental(&self, property_id: &str) -> Result<String, AppError> {
        self.get_text("/properties/v2/detail", &[("property_id", property_id)])
            .await
    }
}
