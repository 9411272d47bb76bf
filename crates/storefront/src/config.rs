//! Storefront client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults target a local backend.
//!
//! - `QKART_ENDPOINT` - Backend API base URL (default: `http://localhost:8082/api/v1`)
//! - `QKART_TIMEOUT_SECS` - HTTP request timeout in seconds (default: 10)
//! - `QKART_SEARCH_DEBOUNCE_MS` - Search input quiescence window (default: 500)
//! - `QKART_CATALOG_TTL_SECS` - Catalog cache time-to-live (default: 300)
//! - `QKART_USERNAME` - Username of the logged-in session
//! - `QKART_TOKEN` - Bearer token of the logged-in session
//!
//! Cart and registration calls need a session; one is only constructed when
//! both `QKART_USERNAME` and `QKART_TOKEN` are present.

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

use crate::session::SessionContext;

/// Default backend endpoint, matching a locally running QKart backend.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8082/api/v1";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;
const DEFAULT_CATALOG_TTL_SECS: u64 = 300;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Backend API base URL (e.g. `http://localhost:8082/api/v1`)
    pub endpoint: Url,
    /// Per-request HTTP timeout
    pub timeout: Duration,
    /// How long search input must be quiet before a request fires
    pub search_debounce: Duration,
    /// How long fetched catalogs stay cached
    pub catalog_ttl: Duration,
    /// Logged-in session, when token and username are configured
    pub session: Option<SessionContext>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is present but
    /// cannot be parsed (malformed URL, non-numeric duration).
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = match std::env::var("QKART_ENDPOINT") {
            Ok(raw) => parse_endpoint("QKART_ENDPOINT", &raw)?,
            Err(_) => default_endpoint(),
        };

        let session = match (std::env::var("QKART_USERNAME"), std::env::var("QKART_TOKEN")) {
            (Ok(username), Ok(token)) => {
                Some(SessionContext::new(username, SecretString::from(token)))
            }
            _ => None,
        };

        Ok(Self {
            endpoint,
            timeout: Duration::from_secs(get_env_u64("QKART_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?),
            search_debounce: Duration::from_millis(get_env_u64(
                "QKART_SEARCH_DEBOUNCE_MS",
                DEFAULT_SEARCH_DEBOUNCE_MS,
            )?),
            catalog_ttl: Duration::from_secs(get_env_u64(
                "QKART_CATALOG_TTL_SECS",
                DEFAULT_CATALOG_TTL_SECS,
            )?),
            session,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            catalog_ttl: Duration::from_secs(DEFAULT_CATALOG_TTL_SECS),
            session: None,
        }
    }
}

fn default_endpoint() -> Url {
    // The default is a compile-time constant and always parses.
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is valid")
}

/// Parse and validate an endpoint URL.
fn parse_endpoint(var_name: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "endpoint must have a host".to_string(),
        ));
    }

    Ok(url)
}

/// Read an optional numeric environment variable, falling back to a default.
fn get_env_u64(key: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.endpoint.as_str(), "http://localhost:8082/api/v1");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.search_debounce, Duration::from_millis(500));
        assert_eq!(config.catalog_ttl, Duration::from_secs(300));
        assert!(config.session.is_none());
    }

    #[test]
    fn test_parse_endpoint_valid() {
        let url = parse_endpoint("TEST_VAR", "https://qkart.example.com/api/v1").unwrap();
        assert_eq!(url.host_str(), Some("qkart.example.com"));
    }

    #[test]
    fn test_parse_endpoint_malformed() {
        let result = parse_endpoint("TEST_VAR", "not a url");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_parse_endpoint_missing_host() {
        let result = parse_endpoint("TEST_VAR", "file:///tmp/backend");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}
