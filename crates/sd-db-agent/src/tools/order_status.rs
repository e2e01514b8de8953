//! get_order_status: order state, with process-flow messaging for ETAs,
//! delays and high-value customers.

use async_trait::async_trait;
use serde_json::{Value, json};

use sd_protocol::payload;
use sd_protocol::{ActionParameters, SupportAction};

use super::{SupportTool, ToolContext, ToolResult, id_schema, require};
use crate::types::order_context;

pub struct OrderStatus;

#[async_trait]
impl SupportTool for OrderStatus {
    fn action(&self) -> SupportAction {
        SupportAction::GetOrderStatus
    }

    fn title(&self) -> &str {
        "Get Order Status"
    }

    fn description(&self) -> &str {
        "Returns status/customer_id for an order"
    }

    fn tags(&self) -> &[&'static str] {
        &["order", "status"]
    }

    fn example_parameters(&self) -> ActionParameters {
        ActionParameters::order("ORD001")
    }

    fn parameters_schema(&self) -> Value {
        id_schema("order_id", "Order identifier, e.g. ORD001")
    }

    async fn execute(&self, params: &ActionParameters, ctx: &ToolContext<'_>) -> ToolResult<Value> {
        let order_id = require(&params.order_id, "order_id")?;

        let Some((order, customer)) = ctx.store.order_with_customer(order_id).await? else {
            return Ok(payload::not_found("Order"));
        };
        let total_orders = ctx.store.count_orders(&customer.id).await?;
        let context = order_context(&order, &customer, total_orders);

        // The support agent learns the customer id from this reply.
        if let Some(reply) = ctx.scenario_reply(self.action(), &context) {
            return Ok(match payload::message_of(&reply) {
                Some(text) => payload::message_for_customer(text, &customer.id),
                None => reply,
            });
        }

        Ok(json!({
            "order_id": order.id,
            "status": order.status,
            "customer_id": customer.id,
        }))
    }
}
