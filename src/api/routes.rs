//! API route configuration.

use crate::api::handlers::{meta_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Create (or look up) the short URL for a long URL
/// - `GET  /{code}`  - Metadata for a short code
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/{code}", get(meta_handler))
}
