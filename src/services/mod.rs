pub mod db_init;

pub mod products_service;
pub mod orders_service;
