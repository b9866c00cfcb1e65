//! Core type definitions for the client.

pub mod telemetry;

pub use telemetry::TelemetryEvent;
