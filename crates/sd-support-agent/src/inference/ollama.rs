//! Ollama model tier for intent parsing.
//!
//! Calls the local Ollama HTTP API (`/api/chat`) with a JSON-only system
//! prompt. Anything the model gets wrong (unreachable, non-JSON, unknown
//! action, low confidence) is a miss so the keyword tier can take over.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use sd_protocol::{ActionParameters, ParsedIntent, SupportAction};

use super::keywords::extract_ids;
use super::{IntentParser, ParseResult};

const SYSTEM_PROMPT: &str = r#"You are an intent parser for a customer support system. Given a customer message, extract the intent and any relevant IDs.

Available intents:

1. get_order_status - Status of one order.
   Parameters: {"order_id": "ORD001"}

2. get_customer_orders - List every order of the customer.
   Parameters: {"customer_id": "C001"} (may be omitted)

3. cancel_service - Cancel a subscription.
   Parameters: {"subscription_id": "SUB001"}

4. subscription_status - Status and renewal date of a subscription.
   Parameters: {"subscription_id": "SUB001"}

5. support_request - The customer needs help from a person.
   Parameters: {"customer_id": "C001"} (may be omitted)

Parameters may only be order_id, customer_id or subscription_id.

Respond with ONLY a JSON object (no markdown, no explanation):
{"action": "<intent>", "parameters": {<ids>}, "confidence": <0.0-1.0>}

If the message doesn't match any intent, respond with:
{"action": null, "parameters": {}, "confidence": 0.0}"#;

/// Minimum confidence threshold. Below this we treat as "no match".
const MIN_CONFIDENCE: f64 = 0.3;

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaConfig {
    /// Ollama HTTP API base URL.
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// When false only the keyword tier runs.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_host() -> String {
    "http://localhost:11434".into()
}
fn default_model() -> String {
    "llama3".into()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_enabled() -> bool {
    true
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            enabled: default_enabled(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    format: &'a str,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Ollama chat API response (only fields we need).
#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Raw model output before validation.
#[derive(Deserialize)]
struct RawIntent {
    action: Option<String>,
    #[serde(default)]
    parameters: Value,
    #[serde(default)]
    confidence: f64,
}

pub struct OllamaParser {
    client: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaParser {
    pub fn new(config: OllamaConfig) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    async fn ask(&self, text: &str) -> Option<String> {
        let url = format!("{}/api/chat", self.config.host.trim_end_matches('/'));
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            format: "json",
            stream: false,
        };

        let response = match self.client.post(&url).json(&body).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = %e, "ollama request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "ollama returned non-200");
            return None;
        }

        match response.json::<ChatResponse>().await {
            Ok(r) => r.message.map(|m| m.content),
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse ollama response body");
                None
            }
        }
    }
}

#[async_trait]
impl IntentParser for OllamaParser {
    async fn parse(&self, text: &str) -> Option<ParseResult> {
        let content = self.ask(text).await?;

        let raw: RawIntent = match serde_json::from_str(&content) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, content = %content, "ollama returned invalid JSON");
                return None;
            }
        };

        let name = raw.action?;
        let Some(action) = SupportAction::parse(&name) else {
            tracing::warn!(action = %name, "ollama returned unknown action");
            return None;
        };

        if raw.confidence < MIN_CONFIDENCE {
            tracing::debug!(
                confidence = raw.confidence,
                action = %action,
                "ollama confidence below threshold"
            );
            return None;
        }

        Some(ParseResult {
            intent: ParsedIntent {
                action,
                parameters: merge_parameters(&raw.parameters, extract_ids(text)),
                confidence: raw.confidence,
            },
            tier: "ollama".into(),
        })
    }

    fn tier_name(&self) -> &str {
        "ollama"
    }
}

/// Ids the model returned, upper-cased, with gaps filled from the text itself.
fn merge_parameters(model: &Value, from_text: ActionParameters) -> ActionParameters {
    let field = |key: &str| {
        model
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_uppercase)
    };
    ActionParameters {
        order_id: field("order_id").or(from_text.order_id),
        customer_id: field("customer_id").or(from_text.customer_id),
        subscription_id: field("subscription_id").or(from_text.subscription_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ollama_response(content: &str) -> Value {
        serde_json::json!({
            "model": "llama3",
            "message": {
                "role": "assistant",
                "content": content
            },
            "done": true
        })
    }

    fn parser_for(server: &MockServer) -> OllamaParser {
        OllamaParser::new(OllamaConfig {
            host: server.uri(),
            model: "llama3".into(),
            timeout_secs: 2,
            enabled: true,
        })
        .unwrap()
    }

    async fn mount(server: &MockServer, content: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ollama_response(content)))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn parse_order_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_partial_json(
                serde_json::json!({"model": "llama3", "format": "json", "stream": false}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(ollama_response(
                r#"{"action": "get_order_status", "parameters": {"order_id": "ord004"}, "confidence": 0.9}"#,
            )))
            .mount(&server)
            .await;

        let result = parser_for(&server)
            .parse("What's the status of order ORD004?")
            .await
            .expect("should parse");
        assert_eq!(result.tier, "ollama");
        assert_eq!(result.intent.action, SupportAction::GetOrderStatus);
        assert_eq!(result.intent.parameters, ActionParameters::order("ORD004"));
    }

    #[tokio::test]
    async fn missing_ids_filled_from_text() {
        let server = MockServer::start().await;
        mount(
            &server,
            r#"{"action": "cancel_service", "parameters": {}, "confidence": 0.8}"#,
        )
        .await;

        let result = parser_for(&server)
            .parse("please cancel sub002")
            .await
            .unwrap();
        assert_eq!(
            result.intent.parameters.subscription_id.as_deref(),
            Some("SUB002")
        );
    }

    #[tokio::test]
    async fn null_action_is_a_miss() {
        let server = MockServer::start().await;
        mount(
            &server,
            r#"{"action": null, "parameters": {}, "confidence": 0.0}"#,
        )
        .await;
        assert!(parser_for(&server).parse("bake me a pizza").await.is_none());
    }

    #[tokio::test]
    async fn low_confidence_is_a_miss() {
        let server = MockServer::start().await;
        mount(
            &server,
            r#"{"action": "support_request", "parameters": {}, "confidence": 0.1}"#,
        )
        .await;
        assert!(parser_for(&server).parse("hmm").await.is_none());
    }

    #[tokio::test]
    async fn unknown_action_is_a_miss() {
        let server = MockServer::start().await;
        mount(
            &server,
            r#"{"action": "refund_everything", "parameters": {}, "confidence": 0.99}"#,
        )
        .await;
        assert!(parser_for(&server).parse("give me money").await.is_none());
    }

    #[tokio::test]
    async fn invalid_json_is_a_miss() {
        let server = MockServer::start().await;
        mount(&server, "Sure! The intent is get_order_status.").await;
        assert!(parser_for(&server).parse("order ORD001").await.is_none());
    }

    #[tokio::test]
    async fn server_error_is_a_miss() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        assert!(parser_for(&server).parse("order ORD001").await.is_none());
    }

    #[tokio::test]
    async fn timeout_is_a_miss() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
            .mount(&server)
            .await;
        assert!(parser_for(&server).parse("order ORD001").await.is_none());
    }

    #[test]
    fn config_defaults() {
        let config = OllamaConfig::default();
        assert_eq!(config.host, "http://localhost:11434");
        assert_eq!(config.model, "llama3");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.enabled);
    }

    #[test]
    fn non_string_ids_are_ignored() {
        let params = merge_parameters(
            &serde_json::json!({"order_id": 4, "customer_id": " c001 "}),
            ActionParameters::default(),
        );
        assert!(params.order_id.is_none());
        assert_eq!(params.customer_id.as_deref(), Some("C001"));
    }
}
