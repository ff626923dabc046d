//! Order endpoints, nested under `/cafe`

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::{Order, OrderRepo};
use crate::http::error::{ApiError, ErrorBody};
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{CreateOrderRequest, NewOrder};

/// Create order response. The new id is not echoed back.
#[derive(Serialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(value_type = String, example = "order created")]
    pub message: &'static str,
}

/// POST /pedido - record one order
#[utoipa::path(
    post,
    path = "/cafe/pedido",
    tag = "orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = CreatedResponse),
        (status = 400, description = "Missing or mistyped field", body = ErrorBody),
        (status = 500, description = "Database unreachable or statement rejected", body = ErrorBody)
    )
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let order = NewOrder::try_from(req)?;
    OrderRepo::new(&state.provider).create(&order).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "order created",
        }),
    ))
}

/// GET /pedidos - every order, as stored
#[utoipa::path(
    get,
    path = "/cafe/pedidos",
    tag = "orders",
    responses(
        (status = 200, description = "All orders", body = Vec<Order>),
        (status = 500, description = "Database unreachable or query rejected", body = ErrorBody)
    )
)]
pub async fn list_orders(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = OrderRepo::new(&state.provider).list_all().await?;
    Ok(Json(orders))
}

/// Order routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/pedido", post(create_order))
        .route("/pedidos", get(list_orders))
}
