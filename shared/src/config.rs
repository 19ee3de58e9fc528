//! Configuration management for the Alexa proxy Lambda.

use std::env;

use crate::{Error, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend origin, without trailing slash
    pub base_url: String,
    /// Enables the long-lived token fallback and debug logging
    pub debug: bool,
    /// Verify the backend's TLS certificate
    pub verify_ssl: bool,
    /// Long-lived access token (only honoured in debug mode)
    pub debug_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("BASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::Config("Please set BASE_URL environment variable.".to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            debug: is_set(lookup("DEBUG")),
            verify_ssl: !is_set(lookup("DO_NOT_VERIFY_SSL")),
            debug_token: lookup("LONG_LIVED_ACCESS_TOKEN").filter(|token| !token.is_empty()),
        })
    }

    /// Default tracing filter directive for this configuration.
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

fn is_set(value: Option<String>) -> bool {
    match value {
        Some(v) => {
            let v = v.trim().to_ascii_lowercase();
            !v.is_empty() && !matches!(v.as_str(), "0" | "false" | "no" | "off")
        }
        None => false,
    }
}
