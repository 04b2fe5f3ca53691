use axum::{routing::get, Router};

use crate::{controllers::health_controller, AppState};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/health", get(health_controller::health))
        .route("/health/db", get(health_controller::health_db))
}
