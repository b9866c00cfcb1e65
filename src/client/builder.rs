use std::sync::Arc;
use std::time::Duration;

use crate::client::core::HeadStartClient;
use crate::config::SessionConfig;
use crate::transport::{HttpTransport, Transport};
use crate::Result;

/// Builder for creating clients with custom configuration.
///
/// Anything not set explicitly falls back to the `HEADSTART_*` environment
/// variables, then to the crate defaults. The API key has no default.
pub struct HeadStartClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    user_id: Option<String>,
    timeout: Option<Duration>,
    ingest_concurrency: usize,
    transport: Option<Arc<dyn Transport>>,
}

impl HeadStartClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_id: None,
            timeout: None,
            ingest_concurrency: 1,
            transport: None,
        }
    }

    /// Set the service base URL (absolute http(s)).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the API key sent in `X-API-KEY`.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the default user id for the session.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Enforce a per-request timeout.
    ///
    /// Off by default, matching the service's existing clients; enabling it is
    /// a deliberate deviation. `HEADSTART_HTTP_TIMEOUT_SECS` is the env
    /// equivalent.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Allow up to `n` overlapping submissions in `ingest_batch`.
    ///
    /// Default is 1: strictly sequential, one round trip completing before the
    /// next begins. Results are delivered in input order either way. The
    /// service may care about submission order, so this is never raised
    /// implicitly.
    pub fn ingest_concurrency(mut self, n: usize) -> Self {
        self.ingest_concurrency = n.max(1);
        self
    }

    /// Inject a transport. Primarily for tests with in-memory transports.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<HeadStartClient> {
        let config = SessionConfig::resolve(self.base_url, self.api_key, self.user_id)?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(self.timeout)?),
        };

        Ok(HeadStartClient::from_parts(
            config,
            transport,
            self.ingest_concurrency,
        ))
    }
}

impl Default for HeadStartClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ENV_API_KEY, ENV_BASE_URL, ENV_LOCK, ENV_USER_ID};
    use std::env;

    fn clear_env() {
        env::remove_var(ENV_BASE_URL);
        env::remove_var(ENV_API_KEY);
        env::remove_var(ENV_USER_ID);
    }

    #[test]
    fn build_falls_back_to_the_environment() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var(ENV_BASE_URL, "http://env-host:8123");
        env::set_var(ENV_API_KEY, "env-key");
        env::set_var(ENV_USER_ID, "user_env");

        let client = HeadStartClientBuilder::new().build().unwrap();
        clear_env();

        assert_eq!(client.config().base_url().as_str(), "http://env-host:8123/");
        assert_eq!(client.config().api_key().unwrap(), "env-key");
        assert_eq!(client.config().user_id(), "user_env");
    }

    #[test]
    fn explicit_builder_values_override_the_environment() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var(ENV_BASE_URL, "http://env-host:8123");
        env::set_var(ENV_API_KEY, "env-key");
        env::remove_var(ENV_USER_ID);

        let client = HeadStartClientBuilder::new()
            .base_url("http://explicit-host:9000")
            .api_key("k9")
            .build()
            .unwrap();
        clear_env();

        assert_eq!(
            client.config().base_url().as_str(),
            "http://explicit-host:9000/"
        );
        assert_eq!(client.config().api_key().unwrap(), "k9");
        assert_eq!(client.config().user_id(), "user_000");
    }
}
