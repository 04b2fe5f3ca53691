pub mod product;
pub mod order;

pub use product::{Product, ProductPayload};
pub use order::{Order, OrderItem, OrderItemPayload, OrderPayload, OrderStatus, OrderWithItems, StatusUpdate};
