use crate::config::ConfigError;
use crate::transport::TransportError;
use thiserror::Error;

/// Unified error type for the Head Start client.
///
/// This aggregates all low-level failures into the categories callers act on:
/// local configuration problems, transport failures, non-2xx responses, and
/// undecodable bodies. No variant is ever recovered internally; every error
/// surfaces to the immediate caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Local configuration problem, raised before any network I/O.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Network-level failure (DNS, refused connection, timeout).
    #[error("network transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service answered with a non-2xx status. Carries the raw body text.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// A 2xx response body that is not valid JSON.
    #[error("response decode error: {message}")]
    Decode { message: String },

    /// A JSON payload outside the response path could not be encoded or
    /// parsed (request payload encoding, CLI input files).
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error (file reads in the CLI, never the network path).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a decode error from any displayable cause.
    pub fn decode(cause: impl std::fmt::Display) -> Self {
        Error::Decode {
            message: cause.to_string(),
        }
    }

    /// True when the error originated locally, before a request left the host.
    pub fn is_local(&self) -> bool {
        matches!(self, Error::Config(_) | Error::Serialization(_) | Error::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_errors_display_status_and_body() {
        let err = Error::Http {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: not found");
    }

    #[test]
    fn serialization_display_does_not_claim_a_request() {
        // Also covers input-file parse failures funneled through the CLI.
        let cause = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err = Error::from(cause);
        assert!(err.to_string().starts_with("JSON serialization error:"));
    }

    #[test]
    fn config_errors_are_local() {
        let err = Error::Config(ConfigError::MissingApiKey);
        assert!(err.is_local());

        let err = Error::Http {
            status: 500,
            body: String::new(),
        };
        assert!(!err.is_local());
    }
}
