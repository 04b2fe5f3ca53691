use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    error::ApiError,
    models::{Product, ProductPayload},
    services::products_service,
    AppState,
};

use super::Pagination;

// POST /products/
pub async fn post_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, ApiError> {
    payload.validate()?;
    let product = products_service::create_product(&state, &payload).await?;
    Ok(Json(product))
}

// GET /products/?skip=&limit=
pub async fn get_products(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = products_service::list_products(&state, page.skip, page.limit).await?;
    Ok(Json(products))
}

// GET /products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    let product = products_service::get_product(&state, id).await?;
    Ok(Json(product))
}

// PUT /products/:id (full overwrite)
pub async fn put_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, ApiError> {
    payload.validate()?;
    let product = products_service::update_product(&state, id, &payload).await?;
    Ok(Json(product))
}

// DELETE /products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    products_service::delete_product(&state, id).await?;
    Ok(Json(json!({ "detail": "Product deleted" })))
}
