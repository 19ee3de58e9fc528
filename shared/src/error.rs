//! Error types for the Alexa proxy Lambda.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort an invocation.
///
/// Backend responses with an error status are not represented here; they are
/// folded into [`crate::TranslationResult::Failure`] instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Required field missing from the envelope
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Request shape we recognise but do not handle
    #[error("Unsupported request: {0}")]
    UnsupportedRequest(String),

    /// Deployment misconfiguration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Backend answered with a success status but the body is not JSON
    #[error("Backend protocol error: {0}")]
    BackendProtocol(#[from] serde_json::Error),

    /// Connection, TLS or timeout failure talking to the backend
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
