//! Repository implementations.
//!
//! Concrete implementations of domain repository traits.
//!
//! # Repositories
//!
//! - [`InMemoryShortUrlRepository`] - Short URL storage in process memory

pub mod memory_short_url_repository;

pub use memory_short_url_repository::InMemoryShortUrlRepository;
