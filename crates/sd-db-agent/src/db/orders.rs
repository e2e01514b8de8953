//! Order queries.

use sqlx::SqlitePool;

use crate::types::{OrderRecord, OrderSummary};

pub async fn get(pool: &SqlitePool, order_id: &str) -> Result<Option<OrderRecord>, sqlx::Error> {
    sqlx::query_as::<_, OrderRecord>(
        "SELECT id, customer_id, status, eta_date, total_amount FROM orders WHERE id = ?",
    )
    .bind(order_id)
    .fetch_optional(pool)
    .await
}

pub async fn count_for_customer(pool: &SqlitePool, customer_id: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders WHERE customer_id = ?")
        .bind(customer_id)
        .fetch_one(pool)
        .await
}

pub async fn list_for_customer(
    pool: &SqlitePool,
    customer_id: &str,
) -> Result<Vec<OrderSummary>, sqlx::Error> {
    sqlx::query_as::<_, OrderSummary>(
        "SELECT id, status FROM orders WHERE customer_id = ? ORDER BY id",
    )
    .bind(customer_id)
    .fetch_all(pool)
    .await
}
