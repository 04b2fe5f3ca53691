use std::net::SocketAddr;

use inventory_api::{config, routes, services, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    let db = services::db_init::connect(&settings.database_url)
        .await
        .expect("Failed to open database");
    services::db_init::ensure_schema(&db)
        .await
        .expect("Failed to create schema");

    let state = AppState {
        db,
        settings: settings.clone(),
    };

    let app = routes::app(state);

    let addr = SocketAddr::from((settings.host.parse::<std::net::IpAddr>().unwrap(), settings.port));
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
