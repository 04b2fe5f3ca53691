use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::{controllers::orders_controller, AppState};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/orders/",
            post(orders_controller::post_order).get(orders_controller::get_orders),
        )
        .route("/orders/:id", get(orders_controller::get_order))
        .route("/orders/:id/status", patch(orders_controller::patch_order_status))
}
