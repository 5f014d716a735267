//! Configuration management for the address book binary.
//!
//! Values come from environment variables, with an optional `.env` file
//! loaded first.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the address book binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default log filter when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,

    /// Start with the demonstration records (default: false)
    pub seed_demo: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `ADDRESS_BOOK_SEED_DEMO`: Load the demonstration records (default: false)
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let seed_demo = Self::parse_env_bool("ADDRESS_BOOK_SEED_DEMO", false)?;

        Ok(Config {
            log_level,
            seed_demo,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            seed_demo: false,
        }
    }
}
