//! subscription_status: plan state and renewal date.

use async_trait::async_trait;
use serde_json::{Value, json};

use sd_protocol::payload;
use sd_protocol::{ActionParameters, SupportAction};

use super::{SupportTool, ToolContext, ToolResult, id_schema, require};
use crate::types::subscription_context;

pub struct SubscriptionStatus;

#[async_trait]
impl SupportTool for SubscriptionStatus {
    fn action(&self) -> SupportAction {
        SupportAction::SubscriptionStatus
    }

    fn title(&self) -> &str {
        "Subscription Status"
    }

    fn description(&self) -> &str {
        "Checks status of a subscription"
    }

    fn tags(&self) -> &[&'static str] {
        &["subscription", "status"]
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

        let context = subscription_context(&subscription, &customer);
        if let Some(reply) = ctx.scenario_reply(self.action(), &context) {
            return Ok(reply);
        }

        Ok(json!({
            "subscription_id": subscription.id,
            "status": subscription.status,
            "renewal_date": subscription.renewal_date,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MemoryStore;
    use crate::tools::testing::{engine, today};

    // today() is 2025-01-18; SUB003 renews 2025-01-31, SUB002 on 2025-02-14.
    const FLOW: &str = r#"[
        {"conditions": {"action": "subscription_status", "subscription.renewal_date": {"within_days": 14}},
         "response_template": "Your {subscription.plan} plan renews on {subscription.renewal_date}."}
    ]"#;

    async fn run(id: &str) -> Value {
        let store = MemoryStore::with_sample_data();
        let scenarios = engine(FLOW);
        let ctx = ToolContext {
            store: &store,
            scenarios: &scenarios,
            today: today(),
        };
        SubscriptionStatus
            .execute(&ActionParameters::subscription(id), &ctx)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn renewal_reminder() {
        assert_eq!(
            run("SUB003").await,
            json!({"message": "Your Family plan renews on 2025-01-31."})
        );
    }

    #[tokio::test]
    async fn default_payload() {
        assert_eq!(
            run("SUB002").await,
            json!({"subscription_id": "SUB002", "status": "Active", "renewal_date": "2025-02-14"})
        );
    }

    #[tokio::test]
    async fn unknown_subscription() {
        assert_eq!(run("SUB404").await, json!({"error": "Subscription not found"}));
    }
}
