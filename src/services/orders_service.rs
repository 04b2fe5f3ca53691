use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    error::ApiError,
    models::{Order, OrderItem, OrderPayload, OrderStatus, OrderWithItems},
    AppState,
};

fn insufficient_stock(product_id: i64, quantity: i64) -> String {
    format!("Product {product_id} has insufficient stock for quantity {quantity}")
}

/// Place an order: validate every line item against current stock, then
/// persist the order, its items, and the stock decrements in one
/// transaction.
///
/// Validation collects every problem instead of failing on the first, so
/// the caller sees the whole list. The write phase re-checks stock with a
/// guarded decrement (`WHERE stock >= ?`); if a concurrent order drained
/// stock between the two passes, the transaction rolls back instead of
/// overselling.
pub async fn place_order(state: &AppState, payload: &OrderPayload) -> Result<OrderWithItems, ApiError> {
    let mut errors: Vec<String> = Vec::new();

    for item in &payload.items {
        let stock: Option<i64> = sqlx::query_scalar("SELECT stock FROM products WHERE id = ?")
            .bind(item.product_id)
            .fetch_optional(&state.db)
            .await?;

        match stock {
            None => errors.push(format!("Product {} not found", item.product_id)),
            Some(stock) if stock < item.quantity => {
                errors.push(insufficient_stock(item.product_id, item.quantity))
            }
            Some(_) => {}
        }
    }

    if !errors.is_empty() {
        return Err(ApiError::OrderRejected(errors));
    }

    let mut tx = state.db.begin().await?;

    let order = sqlx::query_as::<_, Order>(
        "INSERT INTO orders (created_at, status) VALUES (?, ?)
         RETURNING id, created_at, status",
    )
    .bind(Utc::now())
    .bind(payload.status)
    .fetch_one(&mut *tx)
    .await?;

    let mut items = Vec::with_capacity(payload.items.len());

    for item in &payload.items {
        let updated = sqlx::query("UPDATE products SET stock = stock - ? WHERE id = ? AND stock >= ?")
            .bind(item.quantity)
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            // stock moved since the validation pass
            tx.rollback().await?;
            return Err(ApiError::OrderRejected(vec![insufficient_stock(
                item.product_id,
                item.quantity,
            )]));
        }

        let row = sqlx::query_as::<_, OrderItem>(
            "INSERT INTO order_items (order_id, product_id, quantity) VALUES (?, ?, ?)
             RETURNING id, order_id, product_id, quantity",
        )
        .bind(order.id)
        .bind(item.product_id)
        .bind(item.quantity)
        .fetch_one(&mut *tx)
        .await?;

        items.push(row);
    }

    tx.commit().await?;

    Ok(OrderWithItems {
        id: order.id,
        created_at: order.created_at,
        status: order.status,
        items,
    })
}

async fn load_items(db: &SqlitePool, order_id: i64) -> Result<Vec<OrderItem>, sqlx::Error> {
    sqlx::query_as::<_, OrderItem>(
        "SELECT id, order_id, product_id, quantity FROM order_items WHERE order_id = ? ORDER BY id",
    )
    .bind(order_id)
    .fetch_all(db)
    .await
}

async fn with_items(db: &SqlitePool, order: Order) -> Result<OrderWithItems, sqlx::Error> {
    let items = load_items(db, order.id).await?;
    Ok(OrderWithItems {
        id: order.id,
        created_at: order.created_at,
        status: order.status,
        items,
    })
}

pub async fn list_orders(state: &AppState, skip: i64, limit: i64) -> Result<Vec<OrderWithItems>, ApiError> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT id, created_at, status FROM orders ORDER BY id LIMIT ? OFFSET ?",
    )
    .bind(limit.max(0))
    .bind(skip.max(0))
    .fetch_all(&state.db)
    .await?;

    let mut out = Vec::with_capacity(orders.len());
    for order in orders {
        out.push(with_items(&state.db, order).await?);
    }
    Ok(out)
}

pub async fn get_order(state: &AppState, id: i64) -> Result<OrderWithItems, ApiError> {
    let order = sqlx::query_as::<_, Order>("SELECT id, created_at, status FROM orders WHERE id = ?")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Order"))?;

    Ok(with_items(&state.db, order).await?)
}

/// Overwrite the status of an existing order. Any status may move to any
/// other; there are no transition restrictions.
pub async fn update_status(state: &AppState, id: i64, status: OrderStatus) -> Result<OrderWithItems, ApiError> {
    let order = sqlx::query_as::<_, Order>(
        "UPDATE orders SET status = ? WHERE id = ? RETURNING id, created_at, status",
    )
    .bind(status)
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or(ApiError::NotFound("Order"))?;

    Ok(with_items(&state.db, order).await?)
}
