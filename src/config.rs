//! Configuration management for the contact form server.
//!
//! This module handles loading and validating configuration from environment variables.
//! An optional `.env` file is read with `dotenvy`, which never writes to stdout
//! (the MCP channel).

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Default simulated submission delay in milliseconds.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

/// Configuration for the contact form server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Simulated submission delay in milliseconds (default: 1000)
    pub submit_delay_ms: u64,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_FORM_SUBMIT_DELAY_MS`: Simulated submission delay (default: 1000)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let submit_delay_ms =
            Self::parse_env_u64("CONTACT_FORM_SUBMIT_DELAY_MS", DEFAULT_SUBMIT_DELAY_MS)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            submit_delay_ms,
            log_level,
        })
    }

    /// The simulated submission delay.
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
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
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.submit_delay_ms, 1000);
        assert_eq!(config.submit_delay(), Duration::from_secs(1));
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_FORM_SUBMIT_DELAY_MS", "250");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.submit_delay_ms, 250);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_delay() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_FORM_SUBMIT_DELAY_MS", "soon");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_FORM_SUBMIT_DELAY_MS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "  ");

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "LOG_LEVEL"
        ));
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64", "42");

        let result = Config::parse_env_u64("TEST_U64", 10);
        assert_eq!(result.unwrap(), 42);

        let result = Config::parse_env_u64("NONEXISTENT", 10);
        assert_eq!(result.unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64_INVALID", "-5");

        let result = Config::parse_env_u64("TEST_U64_INVALID", 10);
        assert!(result.is_err());
    }
}
