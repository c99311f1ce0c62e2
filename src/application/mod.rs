//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::short_url_service::ShortUrlService`] - Shortening, resolution and metadata
pub mod services;
