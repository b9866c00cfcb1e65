use std::sync::Arc;

use futures::StreamExt;
use reqwest::Method;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::request::{self, Auth};
use crate::response;
use crate::transport::Transport;
use crate::types::TelemetryEvent;
use crate::Result;

/// Session client for the Head Start inference service.
///
/// Holds one explicit [`SessionConfig`] (no process-wide state) and one
/// transport, and exposes the five service operations as thin compositions of
/// request building, transport, and response decoding. No caching, no retry,
/// no backoff: every failure surfaces to the caller, and no failure corrupts
/// the stored configuration.
pub struct HeadStartClient {
    config: SessionConfig,
    transport: Arc<dyn Transport>,
    ingest_concurrency: usize,
}

/// Aggregate result of a batch submission.
///
/// `last_response` is the service's answer to the final event, which for the
/// ingest endpoint reflects the running state after the whole batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReceipt {
    pub submitted: usize,
    pub last_response: Value,
}

impl HeadStartClient {
    pub fn builder() -> crate::client::HeadStartClientBuilder {
        crate::client::HeadStartClientBuilder::new()
    }

    pub(crate) fn from_parts(
        config: SessionConfig,
        transport: Arc<dyn Transport>,
        ingest_concurrency: usize,
    ) -> Self {
        Self {
            config,
            transport,
            ingest_concurrency,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Replace the session configuration wholesale.
    ///
    /// Exclusive access (`&mut self`) is the synchronization story: the config
    /// store is not built for concurrent mutation from multiple callers.
    pub fn reconfigure(&mut self, config: SessionConfig) {
        info!(base_url = %config.base_url(), user_id = config.user_id(), "session reconfigured");
        self.config = config;
    }

    async fn call(&self, method: Method, path: &str, body: Option<Value>, auth: Auth) -> Result<Value> {
        let request = request::build(&self.config, method, path, body, auth)?;
        debug!(method = %request.method, url = %request.url, "dispatching request");
        let raw = self.transport.send(request).await?;
        response::decode(raw)
    }

    /// Submit one telemetry event. POST `/ingest`.
    pub async fn ingest(&self, event: &TelemetryEvent) -> Result<Value> {
        let body = serde_json::to_value(event)?;
        self.call(Method::POST, "/ingest", Some(body), Auth::ApiKey)
            .await
    }

    /// Submit a batch of events, one request per event, in input order.
    ///
    /// Sequential by default: each round trip completes before the next
    /// begins, so N events cost exactly N round trips. With
    /// `ingest_concurrency > 1` up to that many submissions overlap, still
    /// started and resolved in input order. The first failure aborts the
    /// batch.
    pub async fn ingest_batch(&self, events: &[TelemetryEvent]) -> Result<BatchReceipt> {
        let mut submitted = 0;
        let mut last_response = Value::Null;

        if self.ingest_concurrency <= 1 {
            for event in events {
                last_response = self.ingest(event).await?;
                submitted += 1;
            }
        } else {
            let mut results = futures::stream::iter(events.iter().map(|event| self.ingest(event)))
                .buffered(self.ingest_concurrency);
            while let Some(result) = results.next().await {
                last_response = result?;
                submitted += 1;
            }
        }

        info!(submitted, user_id = self.config.user_id(), "telemetry batch ingested");
        Ok(BatchReceipt {
            submitted,
            last_response,
        })
    }

    /// Fetch the current migraine-risk prediction. GET `/predict/{user_id}`.
    pub async fn predict(&self, user_id: &str) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("/predict/{user_id}"),
            None,
            Auth::ApiKey,
        )
        .await
    }

    /// Fetch trigger insights. GET `/insights/{user_id}`.
    pub async fn insights(&self, user_id: &str) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("/insights/{user_id}"),
            None,
            Auth::ApiKey,
        )
        .await
    }

    /// Request coaching recommendations. POST `/coach/{user_id}`.
    ///
    /// The service accepts a null context, so `None` sends `{"context": null}`.
    pub async fn coach(&self, user_id: &str, context: Option<&str>) -> Result<Value> {
        self.call(
            Method::POST,
            &format!("/coach/{user_id}"),
            Some(json!({ "context": context })),
            Auth::ApiKey,
        )
        .await
    }

    /// Liveness probe. GET `/health`, no auth header even when a key is set.
    pub async fn health(&self) -> Result<Value> {
        self.call(Method::GET, "/health", None, Auth::None).await
    }
}
