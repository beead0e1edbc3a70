//! Application configuration loaded from environment variables.
//!
//! Every variable has a default; the app runs with zero configuration.
//!
//! # Environment Variables
//!
//! - `ECOMDEMO_API_BASE_URL` - FakeStore API base URL (default: `https://fakestoreapi.com`)
//! - `ECOMDEMO_API_TIMEOUT_MS` - Per-request timeout (default: 10000)
//! - `ECOMDEMO_API_RETRIES` - Max retries for transient API failures (default: 3)
//! - `ECOMDEMO_API_CACHE_TTL_SECS` - Product/category cache TTL (default: 300)
//! - `ECOMDEMO_STORAGE_DIR` - Directory for persisted state (default: `.ecomdemo`)
//! - `ECOMDEMO_LOAD_TIMEOUT_MS` - Startup hydration bound (default: 1500)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// FakeStore API client configuration
    pub api: ApiConfig,
    /// Persisted-state storage configuration
    pub storage: StorageConfig,
}

/// FakeStore API client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API base URL
    pub base_url: Url,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Maximum retries for transient failures
    pub max_retries: u32,
    /// TTL for cached product/category reads
    pub cache_ttl: Duration,
}

/// Persisted-state storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding one file per storage key
    pub dir: PathBuf,
    /// How long startup hydration may block before failing open to empty
    pub load_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse. Unset
    /// variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            api: ApiConfig::from_env()?,
            storage: StorageConfig::from_env()?,
        })
    }
}

impl ApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_env_or_default("ECOMDEMO_API_BASE_URL", "https://fakestoreapi.com");
        let base_url = Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("ECOMDEMO_API_BASE_URL".to_string(), e.to_string())
        })?;

        Ok(Self {
            base_url,
            request_timeout: Duration::from_millis(parse_env("ECOMDEMO_API_TIMEOUT_MS", 10_000)?),
            max_retries: parse_env("ECOMDEMO_API_RETRIES", 3)?,
            cache_ttl: Duration::from_secs(parse_env("ECOMDEMO_API_CACHE_TTL_SECS", 300)?),
        })
    }
}

impl StorageConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            dir: PathBuf::from(get_env_or_default("ECOMDEMO_STORAGE_DIR", ".ecomdemo")),
            load_timeout: Duration::from_millis(parse_env("ECOMDEMO_LOAD_TIMEOUT_MS", 1_500)?),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_need_no_environment() {
        // Only variables not set by the environment are exercised here;
        // from_env() must succeed with nothing set.
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.api.base_url.host_str(), Some("fakestoreapi.com"));
        assert_eq!(config.api.max_retries, 3);
        assert_eq!(config.api.request_timeout, Duration::from_secs(10));
        assert_eq!(config.storage.load_timeout, Duration::from_millis(1_500));
    }

    #[test]
    fn test_parse_env_default_path() {
        assert_eq!(parse_env("ECOMDEMO_TEST_UNSET_VAR", 7u32).unwrap(), 7);
    }
}
