//! Application error type shared by the engine, the storage port and the HTTP layer.
//!
//! Every failure the service can report is one [`AppError`] variant, so the
//! HTTP adapter maps errors to status codes by matching on the variant instead
//! of inspecting messages.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON error body returned by every endpoint.
///
/// ```json
/// { "error": "UrlNotFoundError", "message": "short code not found" }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted long URL is missing, malformed or not http(s).
    #[error("{message}")]
    InvalidUrl { message: String },

    /// No record exists for the requested short code.
    #[error("{message}")]
    NotFound { message: String },

    /// Every candidate code produced during allocation was already taken.
    #[error("Failed to allocate short code after {attempts} attempts")]
    AllocationExhausted { attempts: usize },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::AllocationExhausted { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Name reported in the `error` field of the response body.
    pub fn error_name(&self) -> &'static str {
        match self {
            AppError::InvalidUrl { .. } => "InvalidUrlError",
            AppError::NotFound { .. } => "UrlNotFoundError",
            AppError::AllocationExhausted { .. } | AppError::Internal { .. } => {
                "InternalServerError"
            }
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.error_name(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Json(self.to_error_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_maps_to_bad_request() {
        let err = AppError::invalid_url("url is missing");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = err.to_error_body();
        assert_eq!(body.error, "InvalidUrlError");
        assert_eq!(body.message, "url is missing");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::not_found("short code not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_name(), "UrlNotFoundError");
    }

    #[test]
    fn test_allocation_exhausted_is_internal() {
        let err = AppError::AllocationExhausted { attempts: 10 };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_name(), "InternalServerError");
        assert_eq!(
            err.to_string(),
            "Failed to allocate short code after 10 attempts"
        );
    }

    #[test]
    fn test_internal_error_body() {
        let body = AppError::internal("storage unavailable").to_error_body();
        assert_eq!(body.error, "InternalServerError");
        assert_eq!(body.message, "storage unavailable");

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "InternalServerError");
        assert_eq!(json["message"], "storage unavailable");
    }
}
