use crate::{
    error::ApiError,
    models::{Product, ProductPayload},
    AppState,
};

pub async fn create_product(state: &AppState, payload: &ProductPayload) -> Result<Product, ApiError> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, description, price, stock)
         VALUES (?, ?, ?, ?)
         RETURNING id, name, description, price, stock",
    )
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(payload.price)
    .bind(payload.stock)
    .fetch_one(&state.db)
    .await?;

    Ok(product)
}

pub async fn list_products(state: &AppState, skip: i64, limit: i64) -> Result<Vec<Product>, ApiError> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, stock FROM products ORDER BY id LIMIT ? OFFSET ?",
    )
    .bind(limit.max(0))
    .bind(skip.max(0))
    .fetch_all(&state.db)
    .await?;

    Ok(products)
}

pub async fn get_product(state: &AppState, id: i64) -> Result<Product, ApiError> {
    sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, stock FROM products WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or(ApiError::NotFound("Product"))
}

/// Full overwrite: every column takes the payload value.
pub async fn update_product(
    state: &AppState,
    id: i64,
    payload: &ProductPayload,
) -> Result<Product, ApiError> {
    sqlx::query_as::<_, Product>(
        "UPDATE products SET name = ?, description = ?, price = ?, stock = ?
         WHERE id = ?
         RETURNING id, name, description, price, stock",
    )
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(payload.price)
    .bind(payload.stock)
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or(ApiError::NotFound("Product"))
}

pub async fn delete_product(state: &AppState, id: i64) -> Result<(), ApiError> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Product"));
    }
    Ok(())
}
