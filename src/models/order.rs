use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Lifecycle of an order. Stored as lowercase TEXT; anything outside this
/// set is rejected when the request body is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

/// Response shape for order endpoints: the order row plus its line items.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

/// Body of `POST /orders/`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderPayload {
    pub status: OrderStatus,
    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<OrderItemPayload>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderItemPayload {
    pub product_id: i64,
    #[validate(range(min = 1, message = "quantity must be a positive integer"))]
    pub quantity: i64,
}

/// Body of `PATCH /orders/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}
