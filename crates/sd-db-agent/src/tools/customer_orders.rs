//! get_customer_orders: every order of a customer.

use async_trait::async_trait;
use serde_json::{Value, json};

use sd_protocol::{ActionParameters, SupportAction};

use super::{SupportTool, ToolContext, ToolResult, id_schema, require};

pub struct CustomerOrders;

#[async_trait]
impl SupportTool for CustomerOrders {
    fn action(&self) -> SupportAction {
        SupportAction::GetCustomerOrders
    }

    fn title(&self) -> &str {
        "Get Customer Orders"
    }

    fn description(&self) -> &str {
        "Lists all orders for a customer"
    }

    fn tags(&self) -> &[&'static str] {
        &["order", "list"]
    }

    fn example_parameters(&self) -> ActionParameters {
        ActionParameters::customer("C001")
    }

    fn parameters_schema(&self) -> Value {
        id_schema("customer_id", "Customer identifier, e.g. C001")
    }

    /// Listings never go through the process flow.
    async fn execute(&self, params: &ActionParameters, ctx: &ToolContext<'_>) -> ToolResult<Value> {
        let customer_id = require(&params.customer_id, "customer_id")?;
        let orders = ctx.store.customer_orders(customer_id).await?;
        Ok(json!({ "orders": orders }))
    }
}
