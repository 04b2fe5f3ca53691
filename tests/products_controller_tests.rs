use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use inventory_api::{config, routes, services, AppState};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("sqlite pool");
    services::db_init::ensure_schema(&pool).await.expect("schema");

    let settings = config::Settings {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
    };

    routes::app(AppState { db: pool, settings })
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn response_json(res: axum::response::Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn post_product_returns_created_product() {
    let app = test_app().await;

    let res = app
        .oneshot(json_request(
            "POST",
            "/products/",
            json!({ "name": "Widget", "description": "A widget", "price": 10.0, "stock": 100 }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);

    let body = response_json(res).await;
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["description"], "A widget");
    assert_eq!(body["price"], json!(10.0));
    assert_eq!(body["stock"], 100);
    assert!(body["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn post_product_negative_price_returns_422() {
    let app = test_app().await;

    let res = app
        .oneshot(json_request(
            "POST",
            "/products/",
            json!({ "name": "Widget", "price": -10.0, "stock": 100 }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(res).await;
    assert!(body["detail"].get("price").is_some());
}

#[tokio::test]
async fn post_product_zero_stock_returns_422() {
    let app = test_app().await;

    let res = app
        .oneshot(json_request(
            "POST",
            "/products/",
            json!({ "name": "Widget", "price": 10.0, "stock": 0 }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(res).await;
    assert!(body["detail"].get("stock").is_some());
}

#[tokio::test]
async fn post_product_empty_name_returns_422() {
    let app = test_app().await;

    let res = app
        .oneshot(json_request(
            "POST",
            "/products/",
            json!({ "name": "", "price": 10.0, "stock": 5 }),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_products_respects_skip_and_limit() {
    let app = test_app().await;

    for name in ["First", "Second", "Third"] {
        let res = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/products/",
                json!({ "name": name, "price": 1.0, "stock": 1 }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = app
        .oneshot(get_request("/products/?skip=1&limit=1"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_json(res).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Second");
}

#[tokio::test]
async fn get_product_unknown_id_returns_404() {
    let app = test_app().await;

    let res = app.oneshot(get_request("/products/999")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = response_json(res).await;
    assert_eq!(body["detail"], "Product not found");
}

#[tokio::test]
async fn get_product_returns_stored_product() {
    let app = test_app().await;

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/products/",
            json!({ "name": "Gadget", "price": 15.0, "stock": 50 }),
        ))
        .await
        .unwrap();
    let created = response_json(res).await;
    let id = created["id"].as_i64().unwrap();

    let res = app
        .oneshot(get_request(&format!("/products/{id}")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_json(res).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Gadget");
    assert_eq!(body["description"], Value::Null);
}

#[tokio::test]
async fn put_product_overwrites_every_field() {
    let app = test_app().await;

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/products/",
            json!({ "name": "Old", "description": "old text", "price": 12.0, "stock": 20 }),
        ))
        .await
        .unwrap();
    let id = response_json(res).await["id"].as_i64().unwrap();

    // Description omitted on purpose: a full overwrite clears it.
    let res = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/products/{id}"),
            json!({ "name": "New", "price": 15.0, "stock": 30 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_json(res).await;
    assert_eq!(body["name"], "New");
    assert_eq!(body["description"], Value::Null);
    assert_eq!(body["price"], json!(15.0));
    assert_eq!(body["stock"], 30);

    let res = app
        .oneshot(get_request(&format!("/products/{id}")))
        .await
        .unwrap();
    let body = response_json(res).await;
    assert_eq!(body["name"], "New");
}

#[tokio::test]
async fn put_product_unknown_id_returns_404() {
    let app = test_app().await;

    let res = app
        .oneshot(json_request(
            "PUT",
            "/products/999",
            json!({ "name": "New", "price": 15.0, "stock": 30 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_product_invalid_payload_returns_422() {
    let app = test_app().await;

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/products/",
            json!({ "name": "Keep", "price": 5.0, "stock": 5 }),
        ))
        .await
        .unwrap();
    let id = response_json(res).await["id"].as_i64().unwrap();

    let res = app
        .oneshot(json_request(
            "PUT",
            &format!("/products/{id}"),
            json!({ "name": "Keep", "price": 0.0, "stock": 5 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_product_then_reads_return_404() {
    let app = test_app().await;

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/products/",
            json!({ "name": "Doomed", "price": 20.0, "stock": 5 }),
        ))
        .await
        .unwrap();
    let id = response_json(res).await["id"].as_i64().unwrap();

    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/products/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = response_json(res).await;
    assert_eq!(body["detail"], "Product deleted");

    let res = app
        .clone()
        .oneshot(get_request(&format!("/products/{id}")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // deleting again is also a 404
    let res = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/products/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
