//! Network transport seam.
//!
//! `Transport` is the one trait boundary in the crate: the facade composes
//! requests and decodes responses, and everything that touches a socket lives
//! behind this trait. Tests substitute an in-memory implementation; production
//! uses [`HttpTransport`].

use async_trait::async_trait;

use crate::request::RequestSpec;
use crate::Result;

pub mod http;

pub use http::{HttpTransport, TransportError};

/// A response reduced to what the handler needs: status and raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Executes one request and returns the raw response.
///
/// Implementations make exactly one network attempt per call — no retries,
/// no backoff. Transport-level failures (DNS, refused connection, timeout)
/// surface as [`TransportError`]; any status code, 2xx or not, comes back as
/// a plain `RawResponse` for the response handler to classify.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: RequestSpec) -> Result<RawResponse>;
}
