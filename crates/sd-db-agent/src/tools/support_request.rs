//! support_request: log a ticket against a customer.

use async_trait::async_trait;
use serde_json::{Value, json};

use sd_protocol::payload;
use sd_protocol::{ActionParameters, SupportAction};

use super::{SupportTool, ToolContext, ToolResult, id_schema, require};
use crate::types::customer_context;

pub struct SupportRequest;

#[async_trait]
impl SupportTool for SupportRequest {
    fn action(&self) -> SupportAction {
        SupportAction::SupportRequest
    }

    fn title(&self) -> &str {
        "Support Request"
    }

    fn description(&self) -> &str {
        "Logs a customer support request"
    }

    fn tags(&self) -> &[&'static str] {
        &["support", "ticket"]
    }

    fn example_parameters(&self) -> ActionParameters {
        ActionParameters::customer("C001")
    }

    fn parameters_schema(&self) -> Value {
        id_schema("customer_id", "Customer identifier, e.g. C001")
    }

    /// The ticket count is incremented before the process flow sees it.
    async fn execute(&self, params: &ActionParameters, ctx: &ToolContext<'_>) -> ToolResult<Value> {
        let customer_id = require(&params.customer_id, "customer_id")?;

        let Some(customer) = ctx.store.open_support_ticket(customer_id).await? else {
            return Ok(payload::not_found("Customer"));
        };
        tracing::info!(
            customer_id = %customer.id,
            tickets = customer.support_ticket_count,
            "support ticket opened"
        );

        let context = customer_context(&customer);
        if let Some(reply) = ctx.scenario_reply(self.action(), &context) {
            return Ok(reply);
        }

        Ok(json!({ "support_ticket_count": customer.support_ticket_count }))
    }
}
