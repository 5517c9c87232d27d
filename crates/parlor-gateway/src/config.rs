//! Gateway configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, so the kiosk app runs against a local backend out of the box.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the backend, e.g. `https://api.parlor.example`.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// ## Variables
    /// - `PARLOR_API_URL` (default `http://localhost:8080`)
    /// - `PARLOR_HTTP_TIMEOUT_SECS` (default `10`)
    pub fn load() -> Result<Self, ConfigError> {
        let base_url =
            env::var("PARLOR_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

        let timeout_secs = env::var("PARLOR_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PARLOR_HTTP_TIMEOUT_SECS".to_string()))?;

        let config = GatewayConfig {
            base_url,
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builds a config directly (tests, embedding).
    pub fn new(base_url: impl Into<String>) -> Self {
        GatewayConfig {
            base_url: base_url.into(),
            timeout_secs: 10,
        }
    }

    /// The request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Joins a path onto the base URL, normalizing slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::MissingRequired("PARLOR_API_URL".to_string()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue("PARLOR_API_URL".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "PARLOR_HTTP_TIMEOUT_SECS".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
