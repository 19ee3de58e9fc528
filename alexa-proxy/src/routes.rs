//! Routing from the invoked function name to a handler.

use serde::Serialize;
use serde_json::Value;
use shared::{Forwarder, SkillKind, TranslationResult};

const FALLBACK_STATUS: u16 = 418;
const FALLBACK_BODY: &str = "Sorry, Dave, I'm afraid I can't do that.";

/// What a function name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Skill(SkillKind),
    Test,
}

/// Deployed function names and the behaviour each one gets.
const ROUTES: [(&str, Route); 3] = [
    ("ariadneSmartHome", Route::Skill(SkillKind::SmartHome)),
    ("ariadneCustom", Route::Skill(SkillKind::Custom)),
    ("ariadneTest", Route::Test),
];

impl Route {
    pub fn from_function_name(name: &str) -> Option<Self> {
        ROUTES
            .iter()
            .find(|(function_name, _)| *function_name == name)
            .map(|(_, route)| *route)
    }
}

/// API Gateway style response returned for unknown functions
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackResponse {
    status_code: u16,
    body: String,
}

impl Default for FallbackResponse {
    fn default() -> Self {
        Self {
            status_code: FALLBACK_STATUS,
            body: FALLBACK_BODY.to_string(),
        }
    }
}

/// Lambda response payload
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum InvocationOutput {
    Translated(TranslationResult),
    Greeting(String),
    Fallback(FallbackResponse),
}

fn greeting() -> String {
    format!(
        "Hello from Ariadne Lambda function, using Rust (alexa-proxy {})!",
        env!("CARGO_PKG_VERSION")
    )
}

/// Run the handler selected by `function_name`.
pub async fn dispatch(
    forwarder: &Forwarder,
    function_name: &str,
    envelope: &Value,
) -> shared::Result<InvocationOutput> {
    match Route::from_function_name(function_name) {
        Some(Route::Skill(kind)) => forwarder
            .forward(envelope, kind)
            .await
            .map(InvocationOutput::Translated),
        Some(Route::Test) => Ok(InvocationOutput::Greeting(greeting())),
        None => Ok(InvocationOutput::Fallback(FallbackResponse::default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::Config;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn forwarder(base_url: &str) -> Forwarder {
        Forwarder::new(Config {
            base_url: base_url.to_string(),
            debug: false,
            verify_ssl: true,
            debug_token: None,
        })
        .unwrap()
    }

    fn discovery_envelope() -> Value {
        json!({
            "directive": {
                "header": {
                    "namespace": "Alexa.Discovery",
                    "name": "Discover",
                    "payloadVersion": "3",
                    "messageId": "msg-1"
                },
                "payload": { "scope": { "type": "BearerToken", "token": "discovery-token" } }
            }
        })
    }

    #[test]
    fn test_route_table() {
        assert_eq!(
            Route::from_function_name("ariadneSmartHome"),
            Some(Route::Skill(SkillKind::SmartHome))
        );
        assert_eq!(
            Route::from_function_name("ariadneCustom"),
            Some(Route::Skill(SkillKind::Custom))
        );
        assert_eq!(Route::from_function_name("ariadneTest"), Some(Route::Test));
        assert_eq!(Route::from_function_name("ariadnesmarthome"), None);
        assert_eq!(Route::from_function_name(""), None);
    }

    #[tokio::test]
    async fn test_unknown_function_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let forwarder = forwarder(&server.uri());
        for envelope in [discovery_envelope(), json!(null), json!({ "directive": 7 })] {
            let output = dispatch(&forwarder, "someOtherFunction", &envelope).await.unwrap();
            assert_eq!(
                serde_json::to_value(&output).unwrap(),
                json!({ "statusCode": 418, "body": "Sorry, Dave, I'm afraid I can't do that." })
            );
        }
    }

    #[tokio::test]
    async fn test_test_function_greets() {
        let output = dispatch(&forwarder("http://127.0.0.1:9"), "ariadneTest", &json!({}))
            .await
            .unwrap();
        let value = serde_json::to_value(&output).unwrap();
        let text = value.as_str().unwrap();
        assert!(text.starts_with("Hello from Ariadne Lambda function"));
    }

    #[tokio::test]
    async fn test_smart_home_is_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/alexa/smart_home"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let output = dispatch(&forwarder(&server.uri()), "ariadneSmartHome", &discovery_envelope())
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({ "event": { "payload": { "type": "INTERNAL_ERROR", "message": "boom" } } })
        );
    }

    #[tokio::test]
    async fn test_validation_errors_propagate() {
        let err = dispatch(&forwarder("http://127.0.0.1:9"), "ariadneSmartHome", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, shared::Error::MalformedRequest(_)));
    }
}
