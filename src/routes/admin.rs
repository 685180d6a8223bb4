use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch},
};

use crate::{
    db::DbPool,
    dto::orders::{StatusUpdateResponse, UpdateOrderStatusRequest},
    error::AppResult,
    models::Order,
    services::admin_service,
};

// Like the system this replaces, these endpoints carry no server-side
// authentication; the admin panel gate was only ever a client-side check.
pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/orders", get(list_orders))
        .route("/orders/{id}/status", patch(update_order_status))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    responses(
        (status = 200, description = "All orders, newest first", body = [Order]),
        (status = 500, description = "Store failure"),
    ),
    tag = "Admin"
)]
pub async fn list_orders(State(pool): State<DbPool>) -> AppResult<Json<Vec<Order>>> {
    let orders = admin_service::list_orders(&pool).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    patch,
    path = "/api/admin/orders/{id}/status",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = StatusUpdateResponse),
        (status = 400, description = "Invalid status transition"),
        (status = 404, description = "Order not found"),
    ),
    tag = "Admin"
)]
pub async fn update_order_status(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<StatusUpdateResponse>> {
    admin_service::update_order_status(&pool, id, &payload.status).await?;
    Ok(Json(StatusUpdateResponse { success: true }))
}
