//! SQLite access layer.
//!
//! Each sub-module provides typed query functions over a `SqlitePool`;
//! [`SqliteStore`] adapts them to the [`SupportStore`] trait.

pub mod customers;
pub mod orders;
pub mod subscriptions;

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::store::{StoreResult, SupportStore};
use crate::types::{
    CancellationRequest, CustomerRecord, OrderRecord, OrderSummary, SubscriptionRecord,
};

/// Open (creating if needed) the SQLite database and run migrations.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    if let Some(dir) = options.get_filename().parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    migrate(&pool).await?;
    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("running database migrations");
    sqlx::raw_sql(include_str!("../../migrations/001_schema.sql"))
        .execute(pool)
        .await?;
    tracing::info!("migrations complete");
    Ok(())
}

/// Load the demo customers, orders and subscriptions. Existing rows are kept.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(include_str!("../../migrations/002_seed.sql"))
        .execute(pool)
        .await?;
    tracing::info!("demo data seeded");
    Ok(())
}

/// [`SupportStore`] backed by a SQLite pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl SupportStore for SqliteStore {
    async fn order_with_customer(
        &self,
        order_id: &str,
    ) -> StoreResult<Option<(OrderRecord, CustomerRecord)>> {
        let Some(order) = orders::get(&self.pool, order_id).await? else {
            return Ok(None);
        };
        let customer = customers::get(&self.pool, &order.customer_id).await?;
        Ok(customer.map(|c| (order, c)))
    }

    async fn count_orders(&self, customer_id: &str) -> StoreResult<i64> {
        Ok(orders::count_for_customer(&self.pool, customer_id).await?)
    }

    async fn customer_orders(&self, customer_id: &str) -> StoreResult<Vec<OrderSummary>> {
        Ok(orders::list_for_customer(&self.pool, customer_id).await?)
    }

    async fn subscription_with_customer(
        &self,
        subscription_id: &str,
    ) -> StoreResult<Option<(SubscriptionRecord, CustomerRecord)>> {
        let Some(subscription) = subscriptions::get(&self.pool, subscription_id).await? else {
            return Ok(None);
        };
        let customer = customers::get(&self.pool, &subscription.customer_id).await?;
        Ok(customer.map(|c| (subscription, c)))
    }

    async fn record_cancellation(&self, request: &CancellationRequest) -> StoreResult<()> {
        Ok(subscriptions::insert_cancellation(&self.pool, request).await?)
    }

    async fn open_support_ticket(&self, customer_id: &str) -> StoreResult<Option<CustomerRecord>> {
        if !customers::increment_support_tickets(&self.pool, customer_id).await? {
            return Ok(None);
        }
        Ok(customers::get(&self.pool, customer_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A single-connection in-memory database: every pooled connection to
    /// `sqlite::memory:` would otherwise get its own empty database.
    async fn seeded_store() -> SqliteStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        migrate(&pool).await.unwrap();
        seed_demo_data(&pool).await.unwrap();
        SqliteStore::new(pool)
    }

    #[tokio::test]
    async fn order_with_customer() {
        let store = seeded_store().await;
        let (order, customer) = store.order_with_customer("ORD001").await.unwrap().unwrap();
        assert_eq!(order.status, "Shipped");
        assert_eq!(order.eta_date.as_deref(), Some("2025-01-20"));
        assert_eq!(customer.name, "Alice Johnson");
        assert!(store.order_with_customer("ORD999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn null_eta_reads_as_none() {
        let store = seeded_store().await;
        let (order, _) = store.order_with_customer("ORD005").await.unwrap().unwrap();
        assert!(order.eta_date.is_none());
    }

    #[tokio::test]
    async fn counts_and_lists_orders() {
        let store = seeded_store().await;
        assert_eq!(store.count_orders("C001").await.unwrap(), 2);
        let orders = store.customer_orders("C001").await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, "ORD001");
        assert!(store.customer_orders("C999").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn subscription_with_customer() {
        let store = seeded_store().await;
        let (sub, customer) = store
            .subscription_with_customer("SUB003")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(sub.plan, "Family");
        assert_eq!(customer.loyalty_tier, "platinum");
    }

    #[tokio::test]
    async fn support_ticket_increments_persist() {
        let store = seeded_store().await;
        let updated = store.open_support_ticket("C001").await.unwrap().unwrap();
        assert_eq!(updated.support_ticket_count, 3);
        let reread = customers::get(store.pool(), "C001").await.unwrap().unwrap();
        assert_eq!(reread.support_ticket_count, 3);
        assert!(store.open_support_ticket("C999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn cancellation_requests_persist() {
        let store = seeded_store().await;
        let request = CancellationRequest {
            id: "CR0a1b2c".into(),
            customer_id: "C002".into(),
            service_id: "SUB002".into(),
            request_date: "2025-01-10".into(),
            status: "Pending".into(),
        };
        store.record_cancellation(&request).await.unwrap();
        let stored = subscriptions::list_cancellations(store.pool()).await.unwrap();
        assert_eq!(stored, vec![request]);
    }

    #[tokio::test]
    async fn seeding_twice_is_harmless() {
        let store = seeded_store().await;
        seed_demo_data(store.pool()).await.unwrap();
        assert_eq!(store.count_orders("C001").await.unwrap(), 2);
    }
}
