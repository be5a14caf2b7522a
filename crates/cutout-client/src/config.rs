//! Configuration for the cutout client
//!
//! The API key is a startup precondition: it is resolved once when the
//! configuration is built and validated at client construction. A missing
//! key fails there, never inside a per-request outcome.

use crate::error::{CutoutError, CutoutResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Production endpoint of the background-removal service
const DEFAULT_ENDPOINT: &str = "https://api.remove.bg/v1.0/removebg";

/// Environment variable holding the service API key
pub const API_KEY_VAR: &str = "REMOVE_BG_API_KEY";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Cutout service endpoint
    pub endpoint: String,
    /// Service API key, sent as `X-Api-Key` on every request
    pub api_key: String,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl ClientConfig {
    /// Create a configuration with the production endpoint and the given key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `REMOVE_BG_API_KEY`: service API key (required)
    /// - `REMOVE_BG_ENDPOINT`: endpoint override (optional)
    /// - `REMOVE_BG_TIMEOUT_SECS`: request timeout in seconds (optional, default 30)
    pub fn from_env() -> CutoutResult<Self> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| CutoutError::missing_env(API_KEY_VAR))?;

        let endpoint =
            env::var("REMOVE_BG_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let timeout = env::var("REMOVE_BG_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        Ok(Self {
            endpoint,
            api_key,
            timeout,
        })
    }

    /// Builder-style method to set the endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Builder-style method to set the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Builder-style method to set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> CutoutResult<()> {
        if self.api_key.is_empty() {
            return Err(CutoutError::config("api_key cannot be empty"));
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(CutoutError::config(
                "endpoint must start with http:// or https://",
            ));
        }

        if self.timeout.is_zero() {
            return Err(CutoutError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = ClientConfig::new("test-key");
        assert_eq!(config.endpoint, "https://api.remove.bg/v1.0/removebg");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::new("test-key")
            .with_endpoint("http://localhost:9000/removebg")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.endpoint, "http://localhost:9000/removebg");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_validation() {
        let valid = ClientConfig::new("test-key");
        assert!(valid.validate().is_ok());

        let empty_key = ClientConfig::new("");
        assert!(empty_key.validate().is_err());

        let bad_endpoint = ClientConfig::new("test-key").with_endpoint("ftp://nope");
        assert!(bad_endpoint.validate().is_err());

        let zero_timeout = ClientConfig::new("test-key").with_timeout(Duration::ZERO);
        assert!(zero_timeout.validate().is_err());
    }
}
