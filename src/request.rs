//! Request construction: URL resolution, header policy, auth preflight.
//!
//! Requests are described as plain data (`RequestSpec`) and handed to the
//! transport unexecuted, which keeps the header/auth policy testable without
//! a socket. The missing-key check lives here so that it always fires before
//! any network I/O.

use reqwest::Method;
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use crate::config::{ConfigError, SessionConfig};
use crate::Result;

/// Header carrying the service token on authenticated endpoints.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Correlation id attached to every request. The service may ignore it, but
/// applications can use it to link client logs to server logs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Whether a request carries the `X-API-KEY` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// Authenticated endpoint: requires a non-empty API key.
    ApiKey,
    /// Unauthenticated endpoint (`/health` only).
    None,
}

/// One HTTP call described as plain data, ready for a transport to execute.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestSpec {
    /// Look up a header by case-insensitive name. Test helper, mostly.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Compose one request against the configured base URL.
///
/// Path resolution follows RFC 3986 reference resolution (`Url::join`): a
/// leading-slash path replaces the base's path component, a relative path
/// resolves against it. Authenticated requests carry `Content-Type` and
/// `X-API-KEY`; building one with an empty key fails with
/// [`ConfigError::MissingApiKey`] before anything touches the network.
pub fn build(
    config: &SessionConfig,
    method: Method,
    path: &str,
    body: Option<Value>,
    auth: Auth,
) -> Result<RequestSpec> {
    let url = config
        .base_url()
        .join(path)
        .map_err(|e| ConfigError::InvalidBaseUrl {
            url: format!("{} + {path}", config.base_url()),
            reason: e.to_string(),
        })?;

    let mut headers = vec![(REQUEST_ID_HEADER.to_string(), Uuid::new_v4().to_string())];
    if auth == Auth::ApiKey {
        let api_key = config.api_key()?;
        headers.push(("Content-Type".to_string(), "application/json".to_string()));
        headers.push((API_KEY_HEADER.to_string(), api_key.to_string()));
    }

    Ok(RequestSpec {
        method,
        url,
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    fn config() -> SessionConfig {
        SessionConfig::new("http://localhost:8000", "k1", "user_000").unwrap()
    }

    #[test]
    fn authenticated_request_carries_both_headers() {
        let req = build(&config(), Method::GET, "/predict/user_000", None, Auth::ApiKey).unwrap();
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("x-api-key"), Some("k1"));
        assert!(req.header("x-request-id").is_some());
    }

    #[test]
    fn health_request_carries_no_api_key() {
        let config = config();
        assert!(config.has_api_key());
        let req = build(&config, Method::GET, "/health", None, Auth::None).unwrap();
        assert_eq!(req.header("x-api-key"), None);
        assert_eq!(req.header("content-type"), None);
    }

    #[test]
    fn empty_key_fails_before_any_io() {
        let config = SessionConfig::new("http://localhost:8000", "", "user_000").unwrap();
        let err = build(&config, Method::GET, "/predict/u", None, Auth::ApiKey).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn empty_key_still_builds_health() {
        let config = SessionConfig::new("http://localhost:8000", "", "user_000").unwrap();
        let req = build(&config, Method::GET, "/health", None, Auth::None).unwrap();
        assert_eq!(req.url.as_str(), "http://localhost:8000/health");
    }

    #[test]
    fn leading_slash_replaces_base_path() {
        let config = SessionConfig::new("http://localhost:8000/api/v1", "k1", "u").unwrap();
        let req = build(&config, Method::GET, "/health", None, Auth::None).unwrap();
        assert_eq!(req.url.as_str(), "http://localhost:8000/health");
    }

    #[test]
    fn relative_path_resolves_against_base() {
        let config = SessionConfig::new("http://localhost:8000/api/", "k1", "u").unwrap();
        let req = build(&config, Method::GET, "predict/user_000", None, Auth::ApiKey).unwrap();
        assert_eq!(req.url.as_str(), "http://localhost:8000/api/predict/user_000");
    }

    #[test]
    fn body_is_kept_verbatim() {
        let body = json!({ "context": "slept badly" });
        let req = build(
            &config(),
            Method::POST,
            "/coach/user_000",
            Some(body.clone()),
            Auth::ApiKey,
        )
        .unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.body, Some(body));
    }

    #[test]
    fn request_ids_are_unique_per_request() {
        let config = config();
        let a = build(&config, Method::GET, "/health", None, Auth::None).unwrap();
        let b = build(&config, Method::GET, "/health", None, Auth::None).unwrap();
        assert_ne!(a.header("x-request-id"), b.header("x-request-id"));
    }
}
