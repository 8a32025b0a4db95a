//! Configuration management for the client.

use std::env;
use std::time::Duration;
use url::Url;

/// Default movie database used for searches.
pub const DEFAULT_SEARCH_URL: &str = "https://api.themoviedb.org/3";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the movie-night API, without trailing slash
    pub api_url: String,
    /// Base URL of the movie database, without trailing slash
    pub search_url: String,
    /// API key for the movie database
    pub search_api_key: Option<String>,
    /// Timeout applied to every request
    pub request_timeout: Duration,
}

impl Config {
    /// Config pointing at `api_url`, with defaults for everything else.
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: normalize_url(api_url)?,
            search_url: normalize_url(DEFAULT_SEARCH_URL)?,
            search_api_key: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through a variable lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("API_URL").ok_or(ConfigError::MissingApiUrl)?;

        let search_url = lookup("SEARCH_URL").unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string());

        let search_api_key = lookup("SEARCH_API_KEY").filter(|key| !key.is_empty());

        let timeout_secs = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(Self {
            api_url: normalize_url(&api_url)?,
            search_url: normalize_url(&search_url)?,
            search_api_key,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Use a different movie database.
    pub fn with_search_url(mut self, search_url: &str) -> Result<Self, ConfigError> {
        self.search_url = normalize_url(search_url)?;
        Ok(self)
    }

    /// Set the movie database API key.
    pub fn with_search_api_key(mut self, key: impl Into<String>) -> Self {
        self.search_api_key = Some(key.into());
        self
    }
}

/// Validate a base URL and strip any trailing slash.
fn normalize_url(raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API_URL environment variable is required")]
    MissingApiUrl,

    #[error("Invalid REQUEST_TIMEOUT_SECS value")]
    InvalidTimeout,

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
