//! Tool payload conventions shared by both agents.
//!
//! Payloads are free-form JSON objects; these helpers keep the key names in
//! one place.

use serde_json::{Value, json};

pub const MESSAGE: &str = "message";
pub const ERROR: &str = "error";
pub const DETAIL: &str = "detail";
pub const CUSTOMER_ID: &str = "customer_id";

/// Error kind reported when a matched scenario could not be rendered.
pub const PROCESS_FLOW_ERROR: &str = "process_flow_error";

/// Payload carrying a rendered scenario message.
pub fn message(text: impl Into<String>) -> Value {
    json!({ MESSAGE: text.into() })
}

/// Scenario message that also tells the caller which customer it concerns.
pub fn message_for_customer(text: impl Into<String>, customer_id: &str) -> Value {
    json!({ MESSAGE: text.into(), CUSTOMER_ID: customer_id })
}

/// `"<entity> not found"` error payload.
pub fn not_found(entity: &str) -> Value {
    json!({ ERROR: format!("{entity} not found") })
}

/// Template rendering failure payload.
pub fn process_flow_error(detail: impl Into<String>) -> Value {
    json!({ ERROR: PROCESS_FLOW_ERROR, DETAIL: detail.into() })
}

/// The rendered message, if the payload carries a non-empty one.
pub fn message_of(payload: &Value) -> Option<&str> {
    payload
        .get(MESSAGE)
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
}

pub fn error_of(payload: &Value) -> Option<&str> {
    payload.get(ERROR).and_then(Value::as_str)
}

pub fn customer_id_of(payload: &Value) -> Option<&str> {
    payload
        .get(CUSTOMER_ID)
        .and_then(Value::as_str)
        .filter(|c| !c.is_empty())
}
