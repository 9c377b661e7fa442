//! Configuration management for the contact book.
//!
//! Settings are read from environment variables, with an optional `.env`
//! file loaded first. Every setting has a default, so an empty environment
//! yields a usable configuration.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Environment variable holding the default batch size for paging.
pub const BATCH_SIZE_VAR: &str = "CONTACT_BOOK_BATCH_SIZE";

/// Environment variable holding the fallback log filter.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of records per batch when paging (default: 10, never 0)
    pub batch_size: usize,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_BATCH_SIZE`: Records per batch (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let batch_size = Self::parse_env_usize(BATCH_SIZE_VAR, 10)?;
        if batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: BATCH_SIZE_VAR.to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: LOG_LEVEL_VAR.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            batch_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            batch_size: 10,
            log_level: "error".to_string(),
        }
    }
}
