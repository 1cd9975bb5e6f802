use api_test_util::{
    CreateUserRequest, HealthResponse, OrderResponse, ProductResponse, UpdateUserRequest,
    UserResponse,
};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;

pub fn router() -> Router {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/users/:id/orders", get(list_user_orders))
        .route("/api/users/:id/orders/:order_id", get(get_user_order))
        .route("/api/orders/:id", get(get_order))
        .route("/api/v1/products", get(list_products))
        .route("/api/v1/products/:id", get(get_product))
        .route("/api/v2/products", get(list_products))
        .route("/api/v2/products/:id", get(get_product))
        .route("/health", get(health))
        .route("/health/ready", get(health))
        .route("/admin/dashboard", get(dashboard))
}

pub async fn serve(listener: TcpListener) -> std::io::Result<()> {
    axum::serve(listener, router()).await
}

#[inline]
async fn list_users() -> Json<Vec<UserResponse>> {
    Json(vec![
        UserResponse::sample(123),
        UserResponse::sample(456),
        UserResponse::sample(789),
    ])
}

#[inline]
async fn create_user(Json(req): Json<CreateUserRequest>) -> (StatusCode, Json<UserResponse>) {
    let user = UserResponse {
        id: 1000,
        name: req.name,
        email: req.email,
    };
    (StatusCode::CREATED, Json(user))
}

#[inline]
async fn get_user(Path(id): Path<u64>) -> Json<UserResponse> {
    Json(UserResponse::sample(id))
}

#[inline]
async fn update_user(
    Path(id): Path<u64>,
    Json(req): Json<UpdateUserRequest>,
) -> Json<UserResponse> {
    Json(UserResponse {
        id,
        name: req.name,
        email: req.email,
    })
}

#[inline]
async fn delete_user(Path(_id): Path<u64>) -> StatusCode {
    StatusCode::NO_CONTENT
}

#[inline]
async fn list_user_orders(Path(id): Path<u64>) -> Json<Vec<OrderResponse>> {
    Json(vec![OrderResponse::sample("order-1", id)])
}

#[inline]
async fn get_user_order(Path((id, order_id)): Path<(u64, String)>) -> Json<OrderResponse> {
    Json(OrderResponse::sample(&order_id, id))
}

#[inline]
async fn get_order(Path(id): Path<String>) -> Json<OrderResponse> {
    Json(OrderResponse::sample(&id, 123))
}

#[inline]
async fn list_products() -> Json<Vec<ProductResponse>> {
    Json(vec![
        ProductResponse::sample("abc-123"),
        ProductResponse::sample("def-456"),
    ])
}

#[inline]
async fn get_product(Path(id): Path<String>) -> Json<ProductResponse> {
    Json(ProductResponse::sample(&id))
}

#[inline]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[inline]
async fn dashboard() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "users": 3,
        "orders": 1,
        "products": 2,
    }))
}
