//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="https://s.example.com"
//! export CODE_LENGTH="6"
//! ```
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `PORT` - Overrides the port part of `LISTEN`
//! - `BASE_URL` - Prefix for generated short URLs (default: `http://localhost:<port>`)
//! - `CODE_LENGTH` - Generated short code length (default: 6, range: 1-64)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

use crate::application::services::ShortenerSettings;

const DEFAULT_LISTEN: &str = "0.0.0.0:3000";
const DEFAULT_CODE_LENGTH: usize = 6;
const MAX_CODE_LENGTH: usize = 64;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Prefix joined with a code to form the public short URL.
    pub base_url: String,
    pub code_length: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `CODE_LENGTH` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr()?;

        let base_url = env::var("BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", port_of(&listen_addr)));

        let code_length = match env::var("CODE_LENGTH") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("CODE_LENGTH must be a positive integer, got '{v}'"))?,
            Err(_) => DEFAULT_CODE_LENGTH,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            base_url,
            code_length,
            log_level,
            log_format,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN`, with its port replaced by `PORT` if that is set
    /// 2. `0.0.0.0:<PORT>`
    /// 3. `0.0.0.0:3000`
    fn load_listen_addr() -> Result<String> {
        let listen = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());

        let Ok(port) = env::var("PORT") else {
            return Ok(listen);
        };

        let port: u16 = port
            .trim()
            .parse()
            .with_context(|| format!("PORT must be a valid port number, got '{port}'"))?;

        let host = listen.rsplit_once(':').map_or("0.0.0.0", |(host, _)| host);

        Ok(format!("{host}:{port}"))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code_length` is outside 1-64
    /// - `base_url` is not an http(s) URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.code_length == 0 {
            anyhow::bail!("CODE_LENGTH must be at least 1");
        }

        if self.code_length > MAX_CODE_LENGTH {
            anyhow::bail!(
                "CODE_LENGTH is too large (max: {}), got {}",
                MAX_CODE_LENGTH,
                self.code_length
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Settings handed to the shortening service.
    pub fn shortener_settings(&self) -> ShortenerSettings {
        ShortenerSettings {
            base_url: self.base_url.clone(),
            code_length: self.code_length,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Code length: {}", self.code_length);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn port_of(listen_addr: &str) -> &str {
    listen_addr
        .rsplit_once(':')
        .map_or("3000", |(_, port)| port)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
