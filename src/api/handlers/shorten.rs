//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "code": "AbC123",
///   "shortUrl": "http://localhost:3000/AbC123",
///   "longUrl": "https://example.com/"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is not a JSON object or `url` is invalid.
/// Returns 500 if no free code could be allocated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(request) = payload.map_err(|e| AppError::invalid_url(e.body_text()))?;

    let shortened = state.short_url_service.shorten(&request.url).await?;

    Ok((StatusCode::CREATED, Json(shortened.into())))
}
