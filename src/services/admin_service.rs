use crate::{
    db::DbPool,
    error::{AppError, AppResult},
    models::{Order, OrderRow, OrderStatus},
};

/// All orders, newest first, with `items` parsed back out of the stored
/// serialized form.
pub async fn list_orders(pool: &DbPool) -> AppResult<Vec<Order>> {
    let rows = sqlx::query_as::<_, OrderRow>(
        r#"
        SELECT id, user_id, customer_name, phone, address, total_amount, items, status, created_at
        FROM orders
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let orders = rows
        .into_iter()
        .map(OrderRow::into_order)
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(orders)
}

/// Move one order along the status machine. The requested value is checked
/// against the current row first; terminal states accept nothing.
pub async fn update_order_status(pool: &DbPool, order_id: i64, status: &str) -> AppResult<()> {
    let next = OrderStatus::parse(status)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown status {status:?}")))?;

    let row: Option<(String,)> = sqlx::query_as("SELECT status FROM orders WHERE id = $1")
        .bind(order_id)
        .fetch_optional(pool)
        .await?;
    let (current,) = row.ok_or(AppError::NotFound)?;

    let current = OrderStatus::parse(&current)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("stored status {current:?} is unknown")))?;

    if !current.can_transition_to(next) {
        return Err(AppError::BadRequest(format!(
            "Cannot move a {current} order to {next}"
        )));
    }

    sqlx::query("UPDATE orders SET status = $1 WHERE id = $2")
        .bind(next.as_str())
        .bind(order_id)
        .execute(pool)
        .await?;

    tracing::info!(order_id, from = %current, to = %next, "order status updated");
    Ok(())
}
