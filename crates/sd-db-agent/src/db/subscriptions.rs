//! Subscription and cancellation request queries.

use sqlx::SqlitePool;

use crate::types::{CancellationRequest, SubscriptionRecord};

pub async fn get(
    pool: &SqlitePool,
    subscription_id: &str,
) -> Result<Option<SubscriptionRecord>, sqlx::Error> {
    sqlx::query_as::<_, SubscriptionRecord>(
        "SELECT id, customer_id, plan, status, renewal_date FROM subscriptions WHERE id = ?",
    )
    .bind(subscription_id)
    .fetch_optional(pool)
    .await
}

pub async fn insert_cancellation(
    pool: &SqlitePool,
    request: &CancellationRequest,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO cancellation_requests (id, customer_id, service_id, request_date, status)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&request.id)
    .bind(&request.customer_id)
    .bind(&request.service_id)
    .bind(&request.request_date)
    .bind(&request.status)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn list_cancellations(pool: &SqlitePool) -> Result<Vec<CancellationRequest>, sqlx::Error> {
    sqlx::query_as::<_, CancellationRequest>(
        "SELECT id, customer_id, service_id, request_date, status FROM cancellation_requests ORDER BY request_date, id",
    )
    .fetch_all(pool)
    .await
}
