use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        order::{OrderSimpleQueryDto, SimpleOrderDto},
    },
    server::{error::AppError, service::order::OrderService, state::AppState},
};

pub static ORDER_TAG: &str = "order";

/// Order graphs with member, delivery, and order items, serialized as is.
#[utoipa::path(
    get,
    path = "/api/v1/simple-orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Orders with their member, delivery, and order items"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn orders_v1(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::new(&state.db).find_order_graphs().await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// Order summaries with member and delivery loaded per order.
#[utoipa::path(
    get,
    path = "/api/v2/simple-orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Order summaries", body = Vec<SimpleOrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn orders_v2(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::new(&state.db)
        .find_simple_orders_per_row()
        .await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// Order summaries with members and deliveries loaded in bulk.
#[utoipa::path(
    get,
    path = "/api/v3/simple-orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Order summaries", body = Vec<SimpleOrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn orders_v3(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::new(&state.db)
        .find_simple_orders_batched()
        .await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// Order summaries projected by a single joined query.
#[utoipa::path(
    get,
    path = "/api/v4/simple-orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Order summaries", body = Vec<OrderSimpleQueryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn orders_v4(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::new(&state.db)
        .find_simple_orders_projected()
        .await?;

    Ok((StatusCode::OK, Json(orders)))
}
