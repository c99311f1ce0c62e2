//! Utility functions used by the shortening service.
//!
//! - [`code_generator`] - Random base-62 short code generation
//! - [`url_validator`] - Long URL validation and normalization

pub mod code_generator;
pub mod url_validator;
