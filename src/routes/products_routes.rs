use axum::{
    routing::{get, post},
    Router,
};

use crate::{controllers::products_controller, AppState};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/products/",
            post(products_controller::post_product).get(products_controller::get_products),
        )
        .route(
            "/products/:id",
            get(products_controller::get_product)
                .put(products_controller::put_product)
                .delete(products_controller::delete_product),
        )
}
