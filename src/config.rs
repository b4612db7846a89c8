//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;

/// Front-end configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the assistant backend (serves `/answer` and `/suggest`).
    pub base_url: String,
    /// Timeout applied to the HTTP client builder.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Build configuration from environment variables, falling back to defaults.
    ///
    /// - `FIN_ASSIST_API_URL` — backend base URL
    /// - `FIN_ASSIST_TIMEOUT_SECS` — HTTP client timeout in seconds
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("FIN_ASSIST_API_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(raw) = std::env::var("FIN_ASSIST_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "FIN_ASSIST_TIMEOUT_SECS".to_string(),
                message: format!("expected an integer number of seconds, got {raw:?}"),
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
