use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Operations the database agent knows how to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportAction {
    /// Status of a single order, looked up by `order_id`.
    GetOrderStatus,
    /// All orders of a customer, looked up by `customer_id`.
    GetCustomerOrders,
    /// File a cancellation request for a subscription.
    CancelService,
    /// Status and renewal date of a subscription.
    SubscriptionStatus,
    /// Log a support ticket for a customer.
    SupportRequest,
}

impl SupportAction {
    pub const ALL: [SupportAction; 5] = [
        Self::GetOrderStatus,
        Self::GetCustomerOrders,
        Self::CancelService,
        Self::SubscriptionStatus,
        Self::SupportRequest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetOrderStatus => "get_order_status",
            Self::GetCustomerOrders => "get_customer_orders",
            Self::CancelService => "cancel_service",
            Self::SubscriptionStatus => "subscription_status",
            Self::SupportRequest => "support_request",
        }
    }

    /// Parse a wire name. Returns `None` for anything outside the known set.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == name)
    }

    /// Whether the action is keyed by the customer rather than an order or
    /// subscription id.
    pub fn needs_customer(&self) -> bool {
        matches!(self, Self::GetCustomerOrders | Self::SupportRequest)
    }
}

impl std::fmt::Display for SupportAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifiers extracted from the customer's message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
}

impl ActionParameters {
    pub fn order(id: impl Into<String>) -> Self {
        Self {
            order_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn customer(id: impl Into<String>) -> Self {
        Self {
            customer_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn subscription(id: impl Into<String>) -> Self {
        Self {
            subscription_id: Some(id.into()),
            ..Self::default()
        }
    }
}

/// Intent extracted from natural language by one of the parsers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedIntent {
    pub action: SupportAction,
    #[serde(default)]
    pub parameters: ActionParameters,
    /// Parser confidence (0.0 - 1.0).
    pub confidence: f64,
}

/// Request sent from the support agent to the database agent.
///
/// `action` stays a plain string on the wire so that the database agent can
/// report unknown actions instead of rejecting the body outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: String,
    #[serde(default)]
    pub parameters: ActionParameters,
}

impl ActionRequest {
    pub fn new(action: SupportAction, parameters: ActionParameters) -> Self {
        Self {
            action: action.as_str().to_string(),
            parameters,
        }
    }
}

/// Outcome of a tool invocation on the database agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Completed,
    Failed,
}

/// Response from the database agent back to the support agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    /// Unique response ID (UUIDv7 for time-sortability).
    pub request_id: Uuid,
    pub action: SupportAction,
    pub status: ResponseStatus,
    /// Tool payload: a scenario message, a default result or an error.
    pub payload: serde_json::Value,
    pub latency_ms: u64,
    pub responded_at: DateTime<Utc>,
}

impl ActionResponse {
    pub fn new(
        action: SupportAction,
        status: ResponseStatus,
        payload: serde_json::Value,
        latency_ms: u64,
    ) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            action,
            status,
            payload,
            latency_ms,
            responded_at: Utc::now(),
        }
    }
}
