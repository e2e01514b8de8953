//! Business records read from the store and the scenario contexts built
//! from them.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CustomerRecord {
    pub id: String,
    pub name: String,
    pub loyalty_tier: String,
    /// `YYYY-MM-DD`.
    pub birth_date: Option<String>,
    pub support_ticket_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderRecord {
    pub id: String,
    pub customer_id: String,
    pub status: String,
    /// `YYYY-MM-DD`.
    pub eta_date: Option<String>,
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SubscriptionRecord {
    pub id: String,
    pub customer_id: String,
    pub plan: String,
    pub status: String,
    /// `YYYY-MM-DD`.
    pub renewal_date: Option<String>,
}

/// Order line in a customer's order listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderSummary {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CancellationRequest {
    pub id: String,
    pub customer_id: String,
    pub service_id: String,
    pub request_date: String,
    pub status: String,
}

impl CustomerRecord {
    pub fn context(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "loyalty_tier": self.loyalty_tier,
            "birth_date": self.birth_date,
            "support_ticket_count": self.support_ticket_count,
        })
    }
}

impl OrderRecord {
    pub fn context(&self) -> Value {
        json!({
            "id": self.id,
            "status": self.status,
            "eta_date": self.eta_date,
            "total_amount": self.total_amount,
        })
    }
}

impl SubscriptionRecord {
    pub fn context(&self) -> Value {
        json!({
            "id": self.id,
            "plan": self.plan,
            "status": self.status,
            "renewal_date": self.renewal_date,
        })
    }
}

/// `{"order": …, "customer": …}` with the customer's lifetime order count.
pub fn order_context(order: &OrderRecord, customer: &CustomerRecord, total_orders: i64) -> Value {
    let mut customer = customer.context();
    customer["total_orders"] = json!(total_orders);
    json!({ "order": order.context(), "customer": customer })
}

/// `{"customer": …, "subscription": …}`.
pub fn subscription_context(subscription: &SubscriptionRecord, customer: &CustomerRecord) -> Value {
    json!({ "customer": customer.context(), "subscription": subscription.context() })
}

/// `{"customer": …}`.
pub fn customer_context(customer: &CustomerRecord) -> Value {
    json!({ "customer": customer.context() })
}
