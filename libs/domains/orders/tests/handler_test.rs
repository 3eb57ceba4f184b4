//! Handler tests for the order domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Unlike E2E tests, these test ONLY the order domain handlers,
//! not the full application with routing, middleware, etc.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_catalog::{
    CategoryService, CreateCategory, CreateProduct, PgCategoryRepository, PgProductRepository,
    Product, ProductService,
};
use domain_orders::*;
use http_body_util::BodyExt;
use serde_json::json;
use test_utils::{TestDatabase, TestDataBuilder};
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn order_service(db: &TestDatabase) -> OrderService<PgOrderRepository> {
    OrderService::new(PgOrderRepository::new(db.connection()))
}

async fn seed_product(db: &TestDatabase, slug: &str, price: i32) -> Product {
    let category = CategoryService::new(PgCategoryRepository::new(db.connection()))
        .create_category(CreateCategory {
            name: format!("{}-category", slug),
        })
        .await
        .unwrap();

    ProductService::new(PgProductRepository::new(db.connection()))
        .create_product(CreateProduct {
            slug: slug.to_string(),
            title: slug.to_string(),
            description: format!("{} description", slug),
            main_image: String::new(),
            price,
            rating: None,
            manufacturer: "Airon".to_string(),
            in_stock: None,
            category_id: category.id,
        })
        .await
        .unwrap()
}

fn checkout_body(email: &str, status: Option<&str>) -> String {
    let mut body = json!({
        "name": "Ada",
        "lastname": "Lovelace",
        "phone": "+1 555 0100",
        "email": email,
        "address": "12 Main St",
        "postal_code": "62704",
        "city": "Springfield",
        "country": "USA",
        "total": 14900,
    });
    if let Some(status) = status {
        body["status"] = json!(status);
    }
    body.to_string()
}

async fn place_order(app: &axum::Router, email: &str, status: Option<&str>) -> Order {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(checkout_body(email, status)))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_order_returns_201_pending() {
    let db = TestDatabase::new().await;
    let app = handlers::router(order_service(&db));

    let builder = TestDataBuilder::from_test_name("order_create");
    let email = builder.email("checkout");

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(checkout_body(&email, None)))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let order: Order = json_body(response.into_body()).await;
    assert_eq!(order.email, email);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, 14900);
}

#[tokio::test]
async fn test_create_order_rejects_malformed_email() {
    let db = TestDatabase::new().await;
    let app = handlers::router(order_service(&db));

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(checkout_body("not-an-email", None)))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_orders_filters_by_email_and_status() {
    let db = TestDatabase::new().await;
    let app = handlers::router(order_service(&db));

    let builder = TestDataBuilder::from_test_name("order_filters");
    let ada = builder.email("ada");
    let grace = builder.email("grace");

    place_order(&app, &ada, Some("active")).await;
    place_order(&app, &ada, Some("completed")).await;
    place_order(&app, &grace, Some("active")).await;

    let request = Request::builder()
        .uri(format!("/?email={}&status=active", ada))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let orders: Vec<Order> = json_body(response.into_body()).await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].email, ada);
    assert_eq!(orders[0].status, OrderStatus::Active);

    // Without filters the listing covers everything
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let orders: Vec<Order> = json_body(response.into_body()).await;
    assert_eq!(orders.len(), 3);
}

#[tokio::test]
async fn test_get_order_returns_404_when_missing() {
    let db = TestDatabase::new().await;
    let app = handlers::router(order_service(&db));

    let request = Request::builder()
        .uri(format!("/{}", Uuid::now_v7()))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_order_changes_status() {
    let db = TestDatabase::new().await;
    let app = handlers::router(order_service(&db));

    let builder = TestDataBuilder::from_test_name("order_update");
    let order = place_order(&app, &builder.email("update"), None).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", order.id))
        .header("content-type", "application/json")
        .body(Body::from(json!({ "status": "completed" }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Order = json_body(response.into_body()).await;
    assert_eq!(updated.status, OrderStatus::Completed);
    assert_eq!(updated.city, "Springfield"); // Untouched
}

#[tokio::test]
async fn test_add_order_item_embeds_the_product() {
    let db = TestDatabase::new().await;
    let product = seed_product(&db, "order-item", 9900).await;
    let app = handlers::router(order_service(&db));

    let builder = TestDataBuilder::from_test_name("order_item");
    let order = place_order(&app, &builder.email("items"), None).await;

    let request = Request::builder()
        .method("POST")
        .uri(format!("/{}/items", order.id))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "product_id": product.id,
                "quantity": 2,
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let item: OrderItem = json_body(response.into_body()).await;
    assert_eq!(item.order_id, order.id);
    assert_eq!(item.quantity, 2);
    assert_eq!(item.product.as_ref().unwrap().price, 9900);
}

#[tokio::test]
async fn test_add_item_to_missing_order_returns_404() {
    let db = TestDatabase::new().await;
    let product = seed_product(&db, "order-lost", 9900).await;
    let app = handlers::router(order_service(&db));

    let request = Request::builder()
        .method("POST")
        .uri(format!("/{}/items", Uuid::now_v7()))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "product_id": product.id,
                "quantity": 1,
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_item_with_unknown_product_returns_404() {
    let db = TestDatabase::new().await;
    let app = handlers::router(order_service(&db));

    let builder = TestDataBuilder::from_test_name("order_unknown_product");
    let order = place_order(&app, &builder.email("lines"), None).await;

    let request = Request::builder()
        .method("POST")
        .uri(format!("/{}/items", order.id))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "product_id": Uuid::now_v7(),
                "quantity": 1,
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_order_items_lists_the_orders_lines() {
    let db = TestDatabase::new().await;
    let keyboard = seed_product(&db, "order-keyboard", 1000).await;
    let monitor = seed_product(&db, "order-monitor", 2500).await;
    let app = handlers::router(order_service(&db));

    let builder = TestDataBuilder::from_test_name("order_lines");
    let order = place_order(&app, &builder.email("list"), None).await;

    for (product, quantity) in [(&keyboard, 2), (&monitor, 1)] {
        let request = Request::builder()
            .method("POST")
            .uri(format!("/{}/items", order.id))
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "product_id": product.id,
                    "quantity": quantity,
                })
                .to_string(),
            ))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let request = Request::builder()
        .uri(format!("/{}/items", order.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let items: Vec<OrderItem> = json_body(response.into_body()).await;
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item.product.is_some()));
}

#[tokio::test]
async fn test_delete_order_cascades_to_its_items() {
    let db = TestDatabase::new().await;
    let product = seed_product(&db, "order-cascade", 9900).await;
    let app = handlers::router(order_service(&db));

    let builder = TestDataBuilder::from_test_name("order_cascade");
    let order = place_order(&app, &builder.email("delete"), None).await;

    let request = Request::builder()
        .method("POST")
        .uri(format!("/{}/items", order.id))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "product_id": product.id,
                "quantity": 1,
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", order.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The order and its items are gone
    let request = Request::builder()
        .uri(format!("/{}/items", order.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
