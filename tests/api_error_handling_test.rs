use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use sales_api::models::product;
use sales_api::{api, db};
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

// Helper to create a test product
async fn create_test_product(db: &DatabaseConnection, name: &str, unit_price: f64) -> i32 {
    let row = product::ActiveModel {
        name: Set(name.to_string()),
        unit_price: Set(unit_price),
        ..Default::default()
    };
    let res = product::Entity::insert(row)
        .exec(db)
        .await
        .expect("Failed to create product");
    res.last_insert_id
}

fn json_request(method: &str, uri: &str, payload: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let db = setup_test_db().await;
    let app = api::api_router(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_sale_returns_full_record() {
    let db = setup_test_db().await;
    let product_id = create_test_product(&db, "Widget", 10.00).await;
    let app = api::api_router(db);

    let payload = serde_json::json!({
        "product_id": product_id,
        "quantity": 3,
        "sale_date": "2025-03-01",
        "customer_name": "Alice",
        "remarks": "first order"
    });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/sales", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["sale"]["amount"], 30.0);
    assert_eq!(body["sale"]["customer_name"], "Alice");
    assert!(body["sale"]["sale_id"].as_i64().unwrap() > 0);

    // The new row shows up in the list
    let response = app
        .oneshot(
            Request::builder()
                .uri("/sales")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn test_create_sale_unknown_product() {
    let db = setup_test_db().await;
    let app = api::api_router(db);

    let payload = serde_json::json!({
        "product_id": 999,
        "quantity": 3,
        "sale_date": "2025-03-01",
        "customer_name": "Alice"
    });

    let response = app
        .oneshot(json_request("POST", "/sales", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Product 999 not found");
}

#[tokio::test]
async fn test_get_sale_not_found() {
    let db = setup_test_db().await;
    let app = api::api_router(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/sales/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Sale 999 not found");
}

#[tokio::test]
async fn test_update_sale_not_found() {
    let db = setup_test_db().await;
    let product_id = create_test_product(&db, "Widget", 10.00).await;
    let app = api::api_router(db);

    let payload = serde_json::json!({
        "product_id": product_id,
        "quantity": 1,
        "sale_date": "2025-03-01",
        "customer_name": "Alice"
    });

    let response = app
        .oneshot(json_request("PUT", "/sales/999", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Sale 999 not found");
}

#[tokio::test]
async fn test_delete_missing_sale_fails_identically_on_repeat() {
    let db = setup_test_db().await;
    let app = api::api_router(db);

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/sales/999")
                    .method("DELETE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response_json(response).await;
        assert_eq!(body["error"], "Sale 999 not found");
    }
}

#[tokio::test]
async fn test_delete_sale_acknowledges_id() {
    let db = setup_test_db().await;
    let product_id = create_test_product(&db, "Widget", 10.00).await;
    let app = api::api_router(db);

    let payload = serde_json::json!({
        "product_id": product_id,
        "quantity": 1,
        "sale_date": "2025-03-01",
        "customer_name": "Alice"
    });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/sales", &payload))
        .await
        .unwrap();
    let body = response_json(response).await;
    let sale_id = body["sale"]["sale_id"].as_i64().unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/sales/{}", sale_id))
                .method("DELETE")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(
        body["message"],
        format!("Sale {} deleted successfully", sale_id)
    );
}

#[tokio::test]
async fn test_create_sale_malformed_body_rejected() {
    let db = setup_test_db().await;
    let app = api::api_router(db);

    // Missing required fields never reaches the service layer
    let payload = serde_json::json!({ "quantity": 3 });

    let response = app
        .oneshot(json_request("POST", "/sales", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
