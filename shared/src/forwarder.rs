//! Forwards Alexa envelopes to the backend and maps its reply.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, warn};

use crate::token::request_token;
use crate::{Config, ErrorEnvelope, ErrorType, Result, SkillKind, TranslationResult};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);
const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client bound to one backend.
pub struct Forwarder {
    config: Config,
    http_client: reqwest::Client,
}

impl Forwarder {
    /// Build a forwarder and its HTTP client from configuration.
    pub fn new(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Forward an envelope to the backend endpoint for `kind`.
    ///
    /// Backend error statuses come back as [`TranslationResult::Failure`];
    /// validation, token and transport problems are returned as errors and no
    /// request is sent when the token cannot be resolved.
    pub async fn forward(&self, envelope: &Value, kind: SkillKind) -> Result<TranslationResult> {
        let token = request_token(envelope, kind, &self.config)?;
        let url = format!("{}{}", self.config.base_url, kind.path());

        debug!(url = %url, skill = ?kind, "Forwarding request to backend");

        let response = self
            .http_client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(CONTENT_TYPE, "application/json")
            .json(envelope)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        translate_response(status, &body)
    }
}

/// Map a backend status and body into the reply for Alexa.
pub fn translate_response(status: u16, body: &[u8]) -> Result<TranslationResult> {
    if status >= 400 {
        let message = String::from_utf8_lossy(body).into_owned();
        warn!(status, "Backend returned error: {}", message);
        return Ok(TranslationResult::Failure(ErrorEnvelope::new(
            ErrorType::from_status(status),
            message,
        )));
    }

    Ok(TranslationResult::Success(serde_json::from_slice(body)?))
}
