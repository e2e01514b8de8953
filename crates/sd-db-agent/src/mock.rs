//! In-memory store for tests and database-less development.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::{StoreResult, SupportStore};
use crate::types::{
    CancellationRequest, CustomerRecord, OrderRecord, OrderSummary, SubscriptionRecord,
};

/// A store that serves pre-loaded records.
#[derive(Default)]
pub struct MemoryStore {
    customers: RwLock<HashMap<String, CustomerRecord>>,
    orders: HashMap<String, OrderRecord>,
    subscriptions: HashMap<String, SubscriptionRecord>,
    cancellations: RwLock<Vec<CancellationRequest>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_customer(&mut self, customer: CustomerRecord) {
        self.customers
            .get_mut()
            .insert(customer.id.clone(), customer);
    }

    pub fn add_order(&mut self, order: OrderRecord) {
        self.orders.insert(order.id.clone(), order);
    }

    pub fn add_subscription(&mut self, subscription: SubscriptionRecord) {
        self.subscriptions
            .insert(subscription.id.clone(), subscription);
    }

    /// Cancellation requests recorded so far.
    pub async fn cancellations(&self) -> Vec<CancellationRequest> {
        self.cancellations.read().await.clone()
    }

    pub async fn customer(&self, customer_id: &str) -> Option<CustomerRecord> {
        self.customers.read().await.get(customer_id).cloned()
    }

    /// The same demo records `migrations/002_seed.sql` loads into SQLite.
    pub fn with_sample_data() -> Self {
        let mut m = Self::new();
        for (id, name, tier, birth, tickets) in [
            ("C001", "Alice Johnson", "gold", "1985-06-15", 2),
            ("C002", "Bob Smith", "silver", "1990-11-02", 0),
            ("C003", "Carol Diaz", "platinum", "1978-02-28", 6),
            ("C004", "Dan Wu", "bronze", "2000-09-09", 1),
        ] {
            m.add_customer(CustomerRecord {
                id: id.into(),
                name: name.into(),
                loyalty_tier: tier.into(),
                birth_date: Some(birth.into()),
                support_ticket_count: tickets,
            });
        }
        for (id, customer, status, eta, total) in [
            ("ORD001", "C001", "Shipped", Some("2025-01-20"), 89.99),
            ("ORD002", "C001", "Delivered", Some("2025-01-05"), 25.00),
            ("ORD003", "C002", "Processing", Some("2025-02-01"), 310.50),
            ("ORD004", "C003", "Shipped", Some("2025-01-18"), 1299.00),
            ("ORD005", "C004", "Cancelled", None, 15.75),
        ] {
            m.add_order(OrderRecord {
                id: id.into(),
                customer_id: customer.into(),
                status: status.into(),
                eta_date: eta.map(Into::into),
                total_amount: total,
            });
        }
        for (id, customer, plan, status, renewal) in [
            ("SUB001", "C001", "Premium", "Active", "2025-03-01"),
            ("SUB002", "C002", "Basic", "Active", "2025-02-14"),
            ("SUB003", "C003", "Family", "Paused", "2025-01-31"),
        ] {
            m.add_subscription(SubscriptionRecord {
                id: id.into(),
                customer_id: customer.into(),
                plan: plan.into(),
                status: status.into(),
                renewal_date: Some(renewal.into()),
            });
        }
        m
    }
}

#[async_trait]
impl SupportStore for MemoryStore {
    async fn order_with_customer(
        &self,
        order_id: &str,
    ) -> StoreResult<Option<(OrderRecord, CustomerRecord)>> {
        let Some(order) = self.orders.get(order_id) else {
            return Ok(None);
        };
        let customers = self.customers.read().await;
        Ok(customers
            .get(&order.customer_id)
            .map(|customer| (order.clone(), customer.clone())))
    }

    async fn count_orders(&self, customer_id: &str) -> StoreResult<i64> {
        Ok(self
            .orders
            .values()
            .filter(|o| o.customer_id == customer_id)
            .count() as i64)
    }

    async fn customer_orders(&self, customer_id: &str) -> StoreResult<Vec<OrderSummary>> {
        let mut orders: Vec<OrderSummary> = self
            .orders
            .values()
            .filter(|o| o.customer_id == customer_id)
            .map(|o| OrderSummary {
                id: o.id.clone(),
                status: o.status.clone(),
            })
            .collect();
        orders.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(orders)
    }

    async fn subscription_with_customer(
        &self,
        subscription_id: &str,
    ) -> StoreResult<Option<(SubscriptionRecord, CustomerRecord)>> {
        let Some(subscription) = self.subscriptions.get(subscription_id) else {
            return Ok(None);
        };
        let customers = self.customers.read().await;
        Ok(customers
            .get(&subscription.customer_id)
            .map(|customer| (subscription.clone(), customer.clone())))
    }

    async fn record_cancellation(&self, request: &CancellationRequest) -> StoreResult<()> {
        self.cancellations.write().await.push(request.clone());
        Ok(())
    }

    async fn open_support_ticket(&self, customer_id: &str) -> StoreResult<Option<CustomerRecord>> {
        let mut customers = self.customers.write().await;
        Ok(customers.get_mut(customer_id).map(|customer| {
            customer.support_ticket_count += 1;
            customer.clone()
        }))
    }
}
