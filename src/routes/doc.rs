use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
        orders::{
            CreateOrderRequest, CreateOrderResponse, StatusUpdateResponse,
            UpdateOrderStatusRequest,
        },
    },
    models::{CartLine, Order, OrderStatus, Product, User},
    routes::{admin, auth, health, orders, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        products::list_products,
        products::get_product,
        orders::create_order,
        admin::list_orders,
        admin::update_order_status,
    ),
    components(
        schemas(
            User,
            Product,
            CartLine,
            Order,
            OrderStatus,
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            CreateOrderRequest,
            CreateOrderResponse,
            UpdateOrderStatusRequest,
            StatusUpdateResponse,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Register and login"),
        (name = "Products", description = "Catalog endpoints"),
        (name = "Orders", description = "Order placement"),
        (name = "Admin", description = "Order management"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
