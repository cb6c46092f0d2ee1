//! Application error type and HTTP response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Envelope for error responses.
///
/// Mirrors the success envelope shape: every response body carries a `status`
/// field, with `"Failure"` for errors alongside the structured error details.
#[derive(Debug, Serialize)]
struct ErrorBody {
    status: &'static str,
    error: ErrorInfo,
}

/// Structured error details included in error response bodies.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Application-level error taxonomy.
///
/// - [`AppError::Validation`] - request shape violations, recovered at the
///   controller layer as 400 before any dispatch happens
/// - [`AppError::Store`] - database call failures (500)
/// - [`AppError::Upstream`] - rental-data provider transport failures or
///   non-success statuses (502)
/// - [`AppError::Internal`] - anything else (500)
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Store { message: String, details: Value },
    Upstream { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn store(message: impl Into<String>, details: Value) -> Self {
        Self::Store {
            message: message.into(),
            details,
        }
    }

    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns the structured error details without the HTTP concerns.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::Store { message, details } => ("store_error", message, details),
            AppError::Upstream { message, details } => ("upstream_unavailable", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            status: "Failure",
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::store(
                    "Unique constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        AppError::store("Database error", json!({ "cause": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let fields: Vec<String> = e.field_errors().keys().map(|k| k.to_string()).collect();

        AppError::bad_request(
            "Request validation failed",
            json!({ "fields": fields, "errors": e.to_string() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_400() {
        let err = AppError::bad_request("missing field", json!({ "field": "accountId" }));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_error_maps_to_502() {
        let err = AppError::upstream("provider returned 500", json!({}));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn store_error_maps_to_500() {
        let err = AppError::store("insert failed", json!({}));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_info_carries_code_and_message() {
        let err = AppError::upstream("boom", json!({ "status": 503 }));
        let info = err.to_error_info();

        assert_eq!(info.code, "upstream_unavailable");
        assert_eq!(info.message, "boom");
        assert_eq!(info.details["status"], 503);
    }
}
