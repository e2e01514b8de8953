//! The five support tools exposed by the database agent.
//!
//! Each tool validates its identifier, reads the store, builds a scenario
//! context and lets the process flow decide the reply. When no scenario
//! matches the tool returns its plain data payload.

pub mod cancel_service;
pub mod customer_orders;
pub mod order_status;
pub mod subscription_status;
pub mod support_request;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{Value, json};
use thiserror::Error;

use sd_protocol::payload;
use sd_protocol::{ActionParameters, SupportAction};
use sd_scenarios::ScenarioEngine;

use crate::store::{StoreError, SupportStore};

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ToolResult<T> = Result<T, ToolError>;

/// What a tool needs to run: the data store, the process flow and the
/// calendar date conditions are evaluated against.
pub struct ToolContext<'a> {
    pub store: &'a dyn SupportStore,
    pub scenarios: &'a ScenarioEngine,
    pub today: NaiveDate,
}

impl ToolContext<'_> {
    /// Evaluate the process flow for `action`.
    ///
    /// `Some(payload)` is either `{"message": …}` or a process flow error;
    /// `None` means the tool should answer with its default payload.
    pub fn scenario_reply(&self, action: SupportAction, context: &Value) -> Option<Value> {
        match self
            .scenarios
            .evaluate_on(action.as_str(), context, self.today)
        {
            Ok(Some(message)) => Some(payload::message(message)),
            Ok(None) => None,
            Err(e) => Some(payload::process_flow_error(e.to_string())),
        }
    }
}

/// A support operation callable through `POST /api/v1/actions`.
#[async_trait]
pub trait SupportTool: Send + Sync {
    fn action(&self) -> SupportAction;

    /// Human-readable name shown on the agent card.
    fn title(&self) -> &str;

    fn description(&self) -> &str;

    fn tags(&self) -> &[&'static str];

    /// Parameters of a representative request, used for the agent card.
    fn example_parameters(&self) -> ActionParameters;

    fn parameters_schema(&self) -> Value;

    async fn execute(
        &self,
        params: &ActionParameters,
        ctx: &ToolContext<'_>,
    ) -> ToolResult<Value>;
}

/// Pull a required, non-blank identifier out of the parameters.
pub(crate) fn require<'p>(
    value: &'p Option<String>,
    name: &'static str,
) -> ToolResult<&'p str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ToolError::MissingParameter(name))
}

/// JSON Schema for a single required string identifier.
pub(crate) fn id_schema(name: &str, description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            name: {
                "type": "string",
                "description": description
            }
        },
        "required": [name]
    })
}

pub fn all_tools() -> Vec<Box<dyn SupportTool>> {
    vec![
        Box::new(order_status::OrderStatus),
        Box::new(customer_orders::CustomerOrders),
        Box::new(cancel_service::CancelService),
        Box::new(subscription_status::SubscriptionStatus),
        Box::new(support_request::SupportRequest),
    ]
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tools_cover_every_action() {
        let tools = all_tools();
        assert_eq!(tools.len(), SupportAction::ALL.len());
        for action in SupportAction::ALL {
            assert!(tools.iter().any(|t| t.action() == action), "{action}");
        }
    }

    #[test]
    fn schemas_require_their_identifier() {
        for tool in all_tools() {
            let schema = tool.parameters_schema();
            assert_eq!(schema["type"], "object");
            assert_eq!(schema["required"].as_array().unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn shipped_process_flow() {
        let scenarios =
            sd_scenarios::load_str(include_str!("../../../../scenarios/process_flow.json"))
                .unwrap();
        let store = crate::mock::MemoryStore::with_sample_data();
        let ctx = ToolContext {
            store: &store,
            scenarios: &scenarios,
            today: testing::today(),
        };

        // ORD001 ships 2025-01-20, two days out.
        let out = order_status::OrderStatus
            .execute(&ActionParameters::order("ORD001"), &ctx)
            .await
            .unwrap();
        assert_eq!(
            payload::message_of(&out),
            Some("Good news Alice Johnson! Order ORD001 is on its way and arrives by 2025-01-20.")
        );

        let out = support_request::SupportRequest
            .execute(&ActionParameters::customer("C004"), &ctx)
            .await
            .unwrap();
        assert_eq!(out, json!({"support_ticket_count": 2}));
    }

    #[test]
    fn require_rejects_blank() {
        assert!(matches!(
            require(&Some("  ".into()), "order_id"),
            Err(ToolError::MissingParameter("order_id"))
        ));
        assert!(require(&None, "order_id").is_err());
        assert_eq!(require(&Some(" ORD001 ".into()), "order_id").unwrap(), "ORD001");
    }
}
