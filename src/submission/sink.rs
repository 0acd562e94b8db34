use std::fmt;

use async_trait::async_trait;

use super::types::{ResultPayload, ResultResponse};

/// Errors that can occur while delivering a result.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// The request never completed (connection refused, DNS, reset).
    Network(String),
    /// The endpoint answered with a non-success status.
    /// `message` is the body's `message` field when it had one.
    Api { status: u16, message: Option<String> },
    /// The body was not the JSON object we expected.
    Parse(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Network(msg) => write!(f, "network error: {msg}"),
            SubmitError::Api { status, message } => match message {
                Some(message) => write!(f, "API error (HTTP {status}): {message}"),
                None => write!(f, "API error (HTTP {status})"),
            },
            SubmitError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Somewhere a finished walk can be reported to.
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Returns the name of the sink.
    fn name(&self) -> &str;

    /// Delivers one payload. No retries; one call is one request.
    async fn submit(&self, payload: &ResultPayload) -> Result<ResultResponse, SubmitError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_variants() {
        assert_eq!(
            SubmitError::Network("connection refused".to_string()).to_string(),
            "network error: connection refused"
        );
        assert_eq!(
            SubmitError::Api { status: 500, message: None }.to_string(),
            "API error (HTTP 500)"
        );
        assert_eq!(
            SubmitError::Api {
                status: 422,
                message: Some("Ouch: email must be a valid email".to_string())
            }
            .to_string(),
            "API error (HTTP 422): Ouch: email must be a valid email"
        );
        assert_eq!(
            SubmitError::Parse("expected value".to_string()).to_string(),
            "parse error: expected value"
        );
    }
}
