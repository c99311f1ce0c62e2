//! Handler for short URL metadata.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::meta::MetaResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record for a short code. Does not count as a click.
///
/// # Endpoint
///
/// `GET /api/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn meta_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<MetaResponse>, AppError> {
    let record = state.short_url_service.get_meta(&code).await?;

    Ok(Json(record.into()))
}
