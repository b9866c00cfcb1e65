//! # headstart-client
//!
//! Typed session client for the Head Start migraine-prediction inference
//! service. The service itself (feature computation, risk model, persistence)
//! lives elsewhere; this crate owns the client-side contract: session
//! configuration, request construction, transport, error surfacing, and
//! response decoding.
//!
//! ## Overview
//!
//! [`HeadStartClient`] exposes the five service operations — `ingest`,
//! `predict`, `insights`, `coach`, `health` — as thin compositions of a
//! validated [`config::SessionConfig`], a plain-data request builder, a
//! single-attempt transport, and a schema-agnostic JSON decoder. Prediction,
//! insights, and coach payloads pass through as `serde_json::Value`; only the
//! outbound [`TelemetryEvent`] has a pinned shape.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use headstart_client::HeadStartClient;
//!
//! #[tokio::main]
//! async fn main() -> headstart_client::Result<()> {
//!     let client = HeadStartClient::builder()
//!         .base_url("http://localhost:8000")
//!         .api_key("dev-token")
//!         .build()?;
//!
//!     let prediction = client.predict("user_000").await?;
//!     println!("{prediction}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Session configuration: base URL, API key, user id |
//! | [`request`] | Request composition, header/auth policy |
//! | [`transport`] | Transport trait and the reqwest implementation |
//! | [`response`] | Status classification and JSON decoding |
//! | [`client`] | The facade and its builder |
//! | [`types`] | Telemetry DTO |

pub mod client;
pub mod config;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;

// Re-export main types for convenience
pub use client::{BatchReceipt, HeadStartClient, HeadStartClientBuilder};
pub use config::{ConfigError, SessionConfig};
pub use transport::{HttpTransport, RawResponse, Transport, TransportError};
pub use types::TelemetryEvent;
