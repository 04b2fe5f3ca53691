use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::{
    error::ApiError,
    models::{OrderPayload, OrderWithItems, StatusUpdate},
    services::orders_service,
    AppState,
};

use super::Pagination;

// POST /orders/
pub async fn post_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderPayload>,
) -> Result<Json<OrderWithItems>, ApiError> {
    payload.validate()?;
    let order = orders_service::place_order(&state, &payload).await?;
    Ok(Json(order))
}

// GET /orders/?skip=&limit=
pub async fn get_orders(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<OrderWithItems>>, ApiError> {
    let orders = orders_service::list_orders(&state, page.skip, page.limit).await?;
    Ok(Json(orders))
}

// GET /orders/:id
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OrderWithItems>, ApiError> {
    let order = orders_service::get_order(&state, id).await?;
    Ok(Json(order))
}

// PATCH /orders/:id/status
pub async fn patch_order_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<StatusUpdate>,
) -> Result<Json<OrderWithItems>, ApiError> {
    let order = orders_service::update_status(&state, id, payload.status).await?;
    Ok(Json(order))
}
