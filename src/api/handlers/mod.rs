//! HTTP request handlers.
//!
//! Each handler module corresponds to one endpoint.

pub mod meta;
pub mod redirect;
pub mod shorten;

pub use meta::meta_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
