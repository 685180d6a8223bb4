use axum::{Json, Router, extract::Path, routing::get};

use crate::{
    catalog,
    db::DbPool,
    error::{AppError, AppResult},
    models::Product,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_products))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List products", body = [Product])
    ),
    tag = "Products"
)]
pub async fn list_products() -> Json<Vec<Product>> {
    Json(catalog::all().to_vec())
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(Path(id): Path<i64>) -> AppResult<Json<Product>> {
    let product = catalog::get(id).ok_or(AppError::NotFound)?;
    Ok(Json(product.clone()))
}
