//! Bearer token extraction from Alexa request envelopes.

use serde_json::Value;
use tracing::debug;

use crate::{Config, Error, Result, SkillKind};

/// Only payload version accepted for Smart Home directives.
const SMART_HOME_PAYLOAD_VERSION: &str = "3";

/// Scope type carrying an OAuth bearer token.
const BEARER_TOKEN: &str = "BearerToken";

type ScopeLocator = fn(&Value) -> Option<&Value>;

/// Where a Smart Home directive may carry its scope, highest precedence first.
const SCOPE_LOCATIONS: [(&str, ScopeLocator); 3] = [
    ("endpoint.scope", endpoint_scope),
    // AcceptGrant directives (account linking)
    ("payload.grantee", payload_grantee),
    // Discovery directives
    ("payload.scope", payload_scope),
];

fn endpoint_scope(directive: &Value) -> Option<&Value> {
    directive.get("endpoint")?.get("scope")
}

fn payload_grantee(directive: &Value) -> Option<&Value> {
    directive.get("payload")?.get("grantee")
}

fn payload_scope(directive: &Value) -> Option<&Value> {
    directive.get("payload")?.get("scope")
}

/// Treat JSON `null` the same as a missing key.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Strings are used as-is and numbers in their JSON form; anything else is absent.
fn as_token(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(token) => Some(token.clone()),
        Value::Number(token) => Some(token.to_string()),
        _ => None,
    }
}

/// Resolve the bearer token to forward for this envelope.
///
/// Falls back to the configured long-lived token only in debug mode.
///
/// # Errors
///
/// `MalformedRequest` / `UnsupportedRequest` for Smart Home envelopes that fail
/// validation, `Config` when no token can be found.
pub fn request_token(envelope: &Value, kind: SkillKind, config: &Config) -> Result<String> {
    let token = match kind {
        SkillKind::SmartHome => smart_home_token(envelope)?,
        SkillKind::Custom => custom_token(envelope),
    };

    // An empty token in the request is not replaced by the debug token.
    token
        .or_else(|| debug_token(config))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| Error::Config("could not obtain access token".to_string()))
}

fn debug_token(config: &Config) -> Option<String> {
    if !config.debug {
        return None;
    }
    let token = config.debug_token.clone()?;
    debug!("No token in request, using long-lived access token");
    Some(token)
}

fn smart_home_token(envelope: &Value) -> Result<Option<String>> {
    let directive = present(envelope.get("directive"))
        .ok_or_else(|| Error::MalformedRequest("missing directive".to_string()))?;

    let version = directive.pointer("/header/payloadVersion").and_then(Value::as_str);
    if version != Some(SMART_HOME_PAYLOAD_VERSION) {
        return Err(Error::UnsupportedRequest(
            "only payloadVersion 3 is supported".to_string(),
        ));
    }

    let Some((location, scope)) = SCOPE_LOCATIONS
        .iter()
        .find_map(|(location, locate)| present(locate(directive)).map(|scope| (*location, scope)))
    else {
        return Ok(None);
    };

    if scope.get("type").and_then(Value::as_str) != Some(BEARER_TOKEN) {
        return Err(Error::UnsupportedRequest(format!(
            "unsupported scope type at {}, only BearerToken is supported",
            location
        )));
    }

    debug!(location, "Found Smart Home scope");
    Ok(as_token(scope.get("token")))
}

fn custom_token(envelope: &Value) -> Option<String> {
    as_token(envelope.pointer("/session/user/accessToken"))
}
