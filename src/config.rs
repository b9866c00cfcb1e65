//! Session configuration: base URL, API key, user id.
//!
//! One `SessionConfig` is built per client lifetime and replaced wholesale on
//! reconfiguration; it is never partially mutated mid-request. The base URL is
//! validated at construction, the API key only at request-build time — an
//! empty key is a legal resting state for a session that has not been handed
//! a token yet, but it blocks every authenticated call before any I/O.

use std::env;

use thiserror::Error;
use url::Url;

/// Base URL used when neither the builder nor the environment supplies one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// User id used when neither the builder nor the environment supplies one.
pub const DEFAULT_USER_ID: &str = "user_000";

/// Environment variable read for the base URL.
pub const ENV_BASE_URL: &str = "HEADSTART_BASE_URL";

/// Environment variable read for the API key.
pub const ENV_API_KEY: &str = "HEADSTART_API_KEY";

/// Environment variable read for the user id.
pub const ENV_USER_ID: &str = "HEADSTART_USER_ID";

/// Local configuration failures. Raised before any request leaves the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No API key is set; authenticated endpoints refuse to build a request.
    #[error("API key is empty; set one before calling authenticated endpoints")]
    MissingApiKey,

    /// The base URL is not an absolute http(s) URL, or a path could not be
    /// resolved against it.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Connection bundle for one session against the inference service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    base_url: Url,
    api_key: String,
    user_id: String,
}

impl SessionConfig {
    /// Validate and store a configuration.
    ///
    /// Blank `base_url` / `user_id` fall back to the defaults; a blank API key
    /// is stored as-is and rejected later by [`SessionConfig::api_key`].
    pub fn new(base_url: &str, api_key: &str, user_id: &str) -> Result<Self, ConfigError> {
        let base_url = base_url.trim();
        let base_url = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };

        let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let user_id = user_id.trim();
        let user_id = if user_id.is_empty() {
            DEFAULT_USER_ID.to_string()
        } else {
            user_id.to_string()
        };

        Ok(Self {
            base_url: parsed,
            api_key: api_key.trim().to_string(),
            user_id,
        })
    }

    /// Build a configuration from `HEADSTART_*` environment variables,
    /// falling back to the defaults (and an empty API key) where unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(None, None, None)
    }

    /// Merge explicit values over the `HEADSTART_*` environment, then over
    /// the defaults. This is the single env-loading path; the client builder
    /// routes through it.
    pub fn resolve(
        base_url: Option<String>,
        api_key: Option<String>,
        user_id: Option<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url
            .or_else(|| env::var(ENV_BASE_URL).ok())
            .unwrap_or_default();
        let api_key = api_key
            .or_else(|| env::var(ENV_API_KEY).ok())
            .unwrap_or_default();
        let user_id = user_id
            .or_else(|| env::var(ENV_USER_ID).ok())
            .unwrap_or_default();
        Self::new(&base_url, &api_key, &user_id)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The API key, or `ConfigError::MissingApiKey` when none is set.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        if self.api_key.is_empty() {
            Err(ConfigError::MissingApiKey)
        } else {
            Ok(&self.api_key)
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

/// Serializes test access to the process environment. Env-reading tests
/// across the crate take this lock before touching `HEADSTART_*` variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
