use serde::Deserialize;

pub mod health_controller;
pub mod products_controller;
pub mod orders_controller;

/// `?skip=&limit=` query params shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}
