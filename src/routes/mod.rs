use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{controllers::health_controller, AppState};

pub mod health_routes;
pub mod products_routes;
pub mod orders_routes;

pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = health_routes::add_routes(router);
    let router = products_routes::add_routes(router);
    let router = orders_routes::add_routes(router);

    router
        .fallback(health_controller::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
