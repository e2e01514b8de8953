//! Customer queries.

use sqlx::SqlitePool;

use crate::types::CustomerRecord;

pub async fn get(pool: &SqlitePool, customer_id: &str) -> Result<Option<CustomerRecord>, sqlx::Error> {
    sqlx::query_as::<_, CustomerRecord>(
        "SELECT id, name, loyalty_tier, birth_date, support_ticket_count FROM customers WHERE id = ?",
    )
    .bind(customer_id)
    .fetch_optional(pool)
    .await
}

/// Bump the ticket counter. Returns `false` if no such customer exists.
pub async fn increment_support_tickets(
    pool: &SqlitePool,
    customer_id: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE customers SET support_ticket_count = support_ticket_count + 1 WHERE id = ?",
    )
    .bind(customer_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}
