use axum::{Json, Router, extract::State, routing::post};

use crate::{
    db::DbPool,
    dto::orders::{CreateOrderRequest, CreateOrderResponse},
    error::AppResult,
    services::order_service,
};

pub fn router() -> Router<DbPool> {
    Router::new().route("/", post(create_order))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = CreateOrderResponse),
        (status = 400, description = "Empty cart"),
        (status = 500, description = "Store failure"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<CreateOrderResponse>> {
    let order_id = order_service::create_order(&pool, payload).await?;
    Ok(Json(CreateOrderResponse {
        success: true,
        order_id,
    }))
}
