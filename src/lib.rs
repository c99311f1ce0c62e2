//! # Short URL
//!
//! A small URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the storage trait
//! - **Application Layer** ([`application`]) - Shortening, resolution and metadata logic
//! - **Infrastructure Layer** ([`infrastructure`]) - Storage implementations
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Idempotent shortening: one code per normalized long URL
//! - Random base-62 codes with bounded collision retry
//! - Click counting on every redirect
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:3000"
//! cargo run
//!
//! curl -X POST localhost:3000/api/shorten -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortUrlService, ShortenerSettings};
    pub use crate::domain::entities::{ShortUrlRecord, ShortenedUrl};
    pub use crate::domain::repositories::ShortUrlRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryShortUrlRepository;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
}
