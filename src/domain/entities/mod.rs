//! Core domain entities.
//!
//! - [`ShortUrlRecord`] - A stored short code to long URL mapping with its click count
//! - [`ShortenedUrl`] - The outcome of shortening a URL, including the public short URL

pub mod short_url;

pub use short_url::{ShortUrlRecord, ShortenedUrl};
