use chrono::Utc;

use crate::{
    db::DbPool,
    dto::orders::CreateOrderRequest,
    error::{AppError, AppResult},
};

/// Persist one order as a frozen snapshot of the submitted cart lines.
/// When the request carries an idempotency key, a replay returns the
/// already-created order id instead of inserting a second row.
pub async fn create_order(pool: &DbPool, payload: CreateOrderRequest) -> AppResult<i64> {
    if payload.items.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".into()));
    }

    if let Some(key) = payload.idempotency_key.as_deref() {
        if let Some(existing) = find_by_idempotency_key(pool, key).await? {
            tracing::info!(order_id = existing, "order replayed via idempotency key");
            return Ok(existing);
        }
    }

    let items = serde_json::to_string(&payload.items).map_err(anyhow::Error::from)?;

    let inserted: Result<(i64,), sqlx::Error> = sqlx::query_as(
        r#"
        INSERT INTO orders
            (user_id, customer_name, phone, address, total_amount, items, status, created_at, idempotency_key)
        VALUES ($1, $2, $3, $4, $5, $6, 'pending', $7, $8)
        RETURNING id
        "#,
    )
    .bind(payload.user_id)
    .bind(payload.customer_name)
    .bind(payload.phone)
    .bind(payload.address)
    .bind(payload.total_amount)
    .bind(items)
    .bind(Utc::now())
    .bind(payload.idempotency_key.as_deref())
    .fetch_one(pool)
    .await;

    let order_id = match inserted {
        Ok((id,)) => id,
        // Two submissions with the same key raced; the earlier insert wins.
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            let key = payload
                .idempotency_key
                .as_deref()
                .ok_or_else(|| AppError::Internal(anyhow::anyhow!("unexpected unique violation")))?;
            find_by_idempotency_key(pool, key)
                .await?
                .ok_or_else(|| {
                    AppError::Internal(anyhow::anyhow!("order missing after key conflict"))
                })?
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(order_id, "order placed");
    Ok(order_id)
}

async fn find_by_idempotency_key(pool: &DbPool, key: &str) -> AppResult<Option<i64>> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM orders WHERE idempotency_key = $1")
        .bind(key)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|(id,)| id))
}
