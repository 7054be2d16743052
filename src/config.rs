//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file, if present, is read by `main` via `dotenvy` first.
//!
//! ## Variables
//!
//! - `BIND_ADDRESS` - Listen host (default: `localhost`)
//! - `BIND_PORT` - Listen port (default: `3000`)
//! - `BASE_URL` - Prefix for issued short URLs (default: `http://localhost:3000/`)
//! - `SHORT_URL_CODE_LENGTH` - Characters per short code, 1-64 (default: `10`)
//! - `SHORT_URL_MAX_ATTEMPTS` - Code allocation attempts per create (default: `10`)
//! - `MAX_BODY_BYTES` - Request body limit (default: `1048576`)
//! - `REQUEST_TIMEOUT_SECS` - Per-request timeout (default: `5`)
//! - `SHUTDOWN_TIMEOUT_SECS` - Grace period for in-flight requests (default: `5`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::persistence::StoreConfig;
use crate::routes::HttpLimits;

const MAX_CODE_LENGTH: usize = 64;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub bind_port: u16,
    /// Prepended to every code. Expected to end with `/`.
    pub base_url: String,
    pub short_code_length: usize,
    /// Upper bound on candidate codes tried per create before reporting
    /// the code space as exhausted.
    pub max_code_attempts: u32,
    pub max_body_bytes: usize,
    pub request_timeout_secs: u64,
    pub shutdown_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "localhost".to_string());
        let bind_port = parse_var("BIND_PORT", 3000)?;
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000/".to_string());
        let short_code_length = parse_var("SHORT_URL_CODE_LENGTH", 10)?;
        let max_code_attempts = parse_var("SHORT_URL_MAX_ATTEMPTS", 10)?;
        let max_body_bytes = parse_var("MAX_BODY_BYTES", 1024 * 1024)?;
        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", 5)?;
        let shutdown_timeout_secs = parse_var("SHUTDOWN_TIMEOUT_SECS", 5)?;
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            bind_address,
            bind_port,
            base_url,
            short_code_length,
            max_code_attempts,
            max_body_bytes,
            request_timeout_secs,
            shutdown_timeout_secs,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `short_code_length` is 0 or greater than 64
    /// - `max_code_attempts` is 0
    /// - `base_url` is empty
    /// - `log_format` is not `text` or `json`
    /// - `max_body_bytes` or either timeout is 0
    pub fn validate(&self) -> Result<()> {
        if self.short_code_length == 0 || self.short_code_length > MAX_CODE_LENGTH {
            anyhow::bail!(
                "SHORT_URL_CODE_LENGTH must be between 1 and {}, got {}",
                MAX_CODE_LENGTH,
                self.short_code_length
            );
        }

        if self.max_code_attempts == 0 {
            anyhow::bail!("SHORT_URL_MAX_ATTEMPTS must be at least 1");
        }

        if self.base_url.is_empty() {
            anyhow::bail!("BASE_URL must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.max_body_bytes == 0 {
            anyhow::bail!("MAX_BODY_BYTES must be greater than 0");
        }

        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than 0");
        }

        if self.shutdown_timeout_secs == 0 {
            anyhow::bail!("SHUTDOWN_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }

    /// Returns the `host:port` pair to bind.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            base_url: self.base_url.clone(),
            code_length: self.short_code_length,
            max_code_attempts: self.max_code_attempts,
        }
    }

    pub fn http_limits(&self) -> HttpLimits {
        HttpLimits {
            max_body_bytes: self.max_body_bytes,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Short code length: {}", self.short_code_length);
        tracing::info!("  Max code attempts: {}", self.max_code_attempts);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if !self.base_url.ends_with('/') {
            tracing::warn!(
                "BASE_URL does not end with '/'; codes will be appended directly to '{}'",
                self.base_url
            );
        }
    }
}

/// Parses `name` if set, falling back to `default` if unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a valid number, got '{value}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "BIND_ADDRESS",
        "BIND_PORT",
        "BASE_URL",
        "SHORT_URL_CODE_LENGTH",
        "SHORT_URL_MAX_ATTEMPTS",
        "MAX_BODY_BYTES",
        "REQUEST_TIMEOUT_SECS",
        "SHUTDOWN_TIMEOUT_SECS",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment run serially via #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            bind_address: "localhost".to_string(),
            bind_port: 3000,
            base_url: "http://localhost:3000/".to_string(),
            short_code_length: 10,
            max_code_attempts: 10,
            max_body_bytes: 1024,
            request_timeout_secs: 5,
            shutdown_timeout_secs: 5,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr(), "localhost:3000");
        assert_eq!(config.base_url, "http://localhost:3000/");
        assert_eq!(config.short_code_length, 10);
        assert_eq!(config.max_code_attempts, 10);
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert_eq!(config.log_format, "text");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial]
        unsafe {
            env::set_var("BIND_ADDRESS", "0.0.0.0");
            env::set_var("BIND_PORT", "8080");
            env::set_var("BASE_URL", "https://sho.rt/");
            env::set_var("SHORT_URL_CODE_LENGTH", "7");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
        assert_eq!(config.store_config().base_url, "https://sho.rt/");
        assert_eq!(config.store_config().code_length, 7);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparsable_number_is_error() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial]
        unsafe {
            env::set_var("BIND_PORT", "not-a-port");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("BIND_PORT"));

        clear_env();
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.short_code_length = 0;
        assert!(config.validate().is_err());

        config.short_code_length = 65;
        assert!(config.validate().is_err());

        config.short_code_length = 10;
        config.max_code_attempts = 0;
        assert!(config.validate().is_err());

        config.max_code_attempts = 10;
        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_http_limits() {
        let limits = valid_config().http_limits();
        assert_eq!(limits.max_body_bytes, 1024);
        assert_eq!(limits.request_timeout, Duration::from_secs(5));
    }
}
