//! cancel_service: file a cancellation request for a subscription.

use async_trait::async_trait;
use serde_json::{Value, json};
use uuid::Uuid;

use sd_protocol::payload;
use sd_protocol::{ActionParameters, SupportAction};

use super::{SupportTool, ToolContext, ToolResult, id_schema, require};
use crate::types::{CancellationRequest, subscription_context};

/// Status of a freshly filed cancellation request.
pub const PENDING: &str = "Pending";

pub struct CancelService;

/// `CR` followed by six hex digits.
fn request_id() -> String {
    // The tail of a v7 UUID is random; the head is a timestamp.
    let hex = Uuid::now_v7().simple().to_string();
    format!("CR{}", &hex[hex.len() - 6..])
}

#[async_trait]
impl SupportTool for CancelService {
    fn action(&self) -> SupportAction {
        SupportAction::CancelService
    }

    fn title(&self) -> &str {
        "Cancel Service"
    }

    fn description(&self) -> &str {
        "Cancels a customer subscription"
    }

    fn tags(&self) -> &[&'static str] {
        &["subscription", "cancel"]
    }

    fn example_parameters(&self) -> ActionParameters {
        ActionParameters::subscription("SUB001")
    }

    fn parameters_schema(&self) -> Value {
        id_schema("subscription_id", "Subscription identifier, e.g. SUB001")
    }

    async fn execute(&self, params: &ActionParameters, ctx: &ToolContext<'_>) -> ToolResult<Value> {
        let subscription_id = require(&params.subscription_id, "subscription_id")?;

        let Some((subscription, customer)) =
            ctx.store.subscription_with_customer(subscription_id).await?
        else {
            return Ok(payload::not_found("Subscription"));
        };

        // Recorded before the process flow runs, whatever it answers.
        let request = CancellationRequest {
            id: request_id(),
            customer_id: customer.id.clone(),
            service_id: subscription.id.clone(),
            request_date: ctx.today.format("%Y-%m-%d").to_string(),
            status: PENDING.to_string(),
        };
        ctx.store.record_cancellation(&request).await?;
        tracing::info!(
            request_id = %request.id,
            subscription_id = %subscription.id,
            customer_id = %customer.id,
            "cancellation request recorded"
        );

        let context = subscription_context(&subscription, &customer);
        if let Some(reply) = ctx.scenario_reply(self.action(), &context) {
            return Ok(reply);
        }

        Ok(json!({
            "subscription_id": subscription.id,
            "status": "cancelled",
        }))
    }
}
