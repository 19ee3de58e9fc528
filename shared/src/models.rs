//! Shared data models.

use serde::Serialize;
use serde_json::Value;

/// Which skill an invocation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    SmartHome,
    Custom,
}

impl SkillKind {
    /// Backend path requests of this kind are forwarded to.
    pub fn path(self) -> &'static str {
        match self {
            SkillKind::SmartHome => "/api/alexa/smart_home",
            SkillKind::Custom => "/api/alexa",
        }
    }
}

/// Error category reported back to Alexa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    InvalidAuthorizationCredential,
    InternalError,
}

impl ErrorType {
    /// Classify a backend error status.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ErrorType::InvalidAuthorizationCredential,
            _ => ErrorType::InternalError,
        }
    }
}

/// `{"event": {"payload": {"type": ..., "message": ...}}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEnvelope {
    pub event: ErrorEvent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEvent {
    pub payload: ErrorPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPayload {
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            event: ErrorEvent {
                payload: ErrorPayload {
                    error_type,
                    message: message.into(),
                },
            },
        }
    }
}

/// Outcome of forwarding an envelope to the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TranslationResult {
    /// Backend body, passed through untouched
    Success(Value),
    /// Backend returned an error status
    Failure(ErrorEnvelope),
}
