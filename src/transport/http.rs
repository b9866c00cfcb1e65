//! reqwest-backed transport.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::request::RequestSpec;
use crate::transport::{RawResponse, Transport};
use crate::{Error, Result};

/// Env override for the request timeout, in whole seconds. Off when unset.
pub const ENV_TIMEOUT_SECS: &str = "HEADSTART_HTTP_TIMEOUT_SECS";

/// Production transport over a pooled `reqwest::Client`.
///
/// No timeout is enforced by default, matching the observed service clients;
/// one can be opted into via the client builder or `HEADSTART_HTTP_TIMEOUT_SECS`.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let timeout = resolve_timeout(timeout);

        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(8)
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: RequestSpec) -> Result<RawResponse> {
        let mut req = self.client.request(request.method, request.url.clone());
        for (name, value) in &request.headers {
            req = req.header(name, value);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        debug!(url = %request.url, status, "request completed");
        Ok(RawResponse { status, body })
    }
}

/// An explicitly configured timeout wins; otherwise the env knob; otherwise
/// no timeout at all.
fn resolve_timeout(explicit: Option<Duration>) -> Option<Duration> {
    explicit.or_else(|| {
        env::var(ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
    })
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Other(String),
}
