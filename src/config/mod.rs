//! # Configuration Module
//!
//! This module handles loading configuration from environment variables.
//! All settings are centralized here.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = AppConfig::from_env()?;
//! println!("Port: {}", config.server_port);
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `CORS_ORIGINS` | Comma-separated allowed origins | `http://localhost:3000` |
//! | `BACKEND_PORT` | HTTP server port | `8000` |

use std::env;
use thiserror::Error;

/// Host address the HTTP server binds to.
///
/// The service always listens on all interfaces; only the port is
/// configurable.
pub const BIND_HOST: &str = "0.0.0.0";

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse a value
    #[error("Failed to parse {0}: {1}")]
    ParseError(String, String),
}

/// Application configuration loaded from environment variables.
///
/// Both settings are optional; unset variables fall back to the defaults
/// listed in the module documentation. Values are read once at startup and
/// are immutable afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Origins allowed to make cross-origin requests.
    ///
    /// Parsed from `CORS_ORIGINS` by splitting on commas. Entries are kept
    /// verbatim: no trimming, no deduplication, no format validation. An
    /// entry carrying stray whitespace stays in the list and will not match
    /// any real browser origin.
    pub cors_origins: Vec<String>,

    /// HTTP server port number.
    ///
    /// Default: 8000
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Use `dotenvy::dotenv()` before calling this to load from a `.env`
    /// file.
    ///
    /// ## Returns
    ///
    /// - `Ok(AppConfig)` - Configuration loaded successfully
    /// - `Err(ConfigError)` - `BACKEND_PORT` is set to a non-integer value
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            cors_origins: parse_origins(&get_env_or_default(
                "CORS_ORIGINS",
                "http://localhost:3000",
            )),
            server_port: parse_port(&get_env_or_default("BACKEND_PORT", "8000"))?,
        })
    }
}

/// Get an environment variable with a default value.
///
/// Returns the default if the variable is not set.
fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Split a comma-separated origin list.
///
/// Every substring between commas becomes one entry, whitespace and all;
/// nothing is trimmed or deduplicated.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.to_string()).collect()
}

/// Parse the listening port.
///
/// Anything that is not a valid `u16` is an error, which `main` treats as
/// fatal.
fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse()
        .map_err(|e| ConfigError::ParseError("BACKEND_PORT".to_string(), format!("{}", e)))
}
