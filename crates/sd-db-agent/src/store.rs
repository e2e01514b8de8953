//! Store abstraction: business data from SQLite, memory, or other backends.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{
    CancellationRequest, CustomerRecord, OrderRecord, OrderSummary, SubscriptionRecord,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Other(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Queries the support tools run against the customer database.
///
/// Implemented by [`crate::db::SqliteStore`] in production and
/// [`crate::mock::MemoryStore`] in tests.
#[async_trait]
pub trait SupportStore: Send + Sync {
    /// An order together with the customer who placed it.
    async fn order_with_customer(
        &self,
        order_id: &str,
    ) -> StoreResult<Option<(OrderRecord, CustomerRecord)>>;

    /// Number of orders the customer has placed.
    async fn count_orders(&self, customer_id: &str) -> StoreResult<i64>;

    /// All orders of a customer, in id order.
    async fn customer_orders(&self, customer_id: &str) -> StoreResult<Vec<OrderSummary>>;

    /// A subscription together with its owner.
    async fn subscription_with_customer(
        &self,
        subscription_id: &str,
    ) -> StoreResult<Option<(SubscriptionRecord, CustomerRecord)>>;

    /// Persist a cancellation request.
    async fn record_cancellation(&self, request: &CancellationRequest) -> StoreResult<()>;

    /// Increment the customer's support ticket count and return the updated
    /// customer, or `None` if the customer does not exist.
    async fn open_support_ticket(&self, customer_id: &str) -> StoreResult<Option<CustomerRecord>>;
}
