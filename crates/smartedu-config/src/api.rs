//! Backend API configuration.
//!
//! # Environment Variables
//!
//! - `SMARTEDU_API_URL`: Origin of the REST backend, e.g. `https://api.smartedu.example/api/v1`
//!   (no default: when missing every API call fails with a configuration error)
//! - `SMARTEDU_API_TIMEOUT_SECONDS`: Per-request timeout (default: `30`)
//! - `SMARTEDU_LOG_ENDPOINT`: Where client logs are forwarded (optional)

use std::time::Duration;

use crate::parse_or;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("SMARTEDU_API_URL is not set")]
    MissingBaseUrl,

    #[error("SMARTEDU_API_URL must start with http:// or https://, got {0}")]
    InvalidBaseUrl(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin without a trailing slash.
    pub base_url: Option<String>,

    /// Timeout applied to every request.
    pub timeout: Duration,

    /// Endpoint accepting forwarded `{ level, message, data }` log entries.
    pub log_endpoint: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            log_endpoint: None,
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            base_url: non_empty("SMARTEDU_API_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string()),
            timeout: Duration::from_secs(parse_or(&lookup, "SMARTEDU_API_TIMEOUT_SECONDS", 30)),
            log_endpoint: non_empty("SMARTEDU_LOG_ENDPOINT").map(|url| url.trim().to_string()),
        }
    }

    /// Config pointing at `base_url`, other values default.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: Some(base_url.trim_end_matches('/').to_string()),
            ..Self::default()
        }
    }

    /// The validated backend origin.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the origin is missing or not an http(s) URL.
    pub fn base_url(&self) -> Result<&str, ConfigError> {
        let url = self.base_url.as_deref().ok_or(ConfigError::MissingBaseUrl)?;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(url.to_string()));
        }
        Ok(url)
    }

    /// Joins a request path onto the backend origin.
    pub fn url_for(&self, path: &str) -> Result<String, ConfigError> {
        let base = self.base_url()?;
        Ok(format!("{}/{}", base, path.trim_start_matches('/')))
    }
}
