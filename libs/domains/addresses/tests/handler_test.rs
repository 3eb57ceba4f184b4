//! Handler tests for the address domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Unlike E2E tests, these test ONLY the address domain handlers,
//! not the full application with routing, middleware, etc.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_addresses::*;
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

fn address_service(db: &TestDatabase) -> AddressService<PgAddressRepository> {
    AddressService::new(PgAddressRepository::new(db.connection()))
}

async fn create_address(
    app: &axum::Router,
    user_id: Uuid,
    street: &str,
    is_default: bool,
) -> Address {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "user_id": user_id,
                "street": street,
                "city": "Springfield",
                "state": "IL",
                "postal_code": "62704",
                "is_default": is_default,
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_address_returns_201() {
    let db = TestDatabase::new().await;
    let app = handlers::router(address_service(&db));

    let user_id = TestDataBuilder::from_test_name("address_create").user_id();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "user_id": user_id,
                "street": "12 Main St",
                "apartment": "4B",
                "city": "Springfield",
                "state": "IL",
                "postal_code": "62704",
                "address_type": "home",
                "latitude": 39.78,
                "longitude": -89.65,
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let address: Address = json_body(response.into_body()).await;
    assert_eq!(address.street, "12 Main St");
    assert_eq!(address.apartment.as_deref(), Some("4B"));
    assert!(!address.is_default); // Defaults to false when omitted
}

#[tokio::test]
async fn test_create_address_rejects_missing_required_fields() {
    let db = TestDatabase::new().await;
    let app = handlers::router(address_service(&db));

    let user_id = TestDataBuilder::from_test_name("address_invalid").user_id();

    // No city
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "user_id": user_id,
                "street": "12 Main St",
                "state": "IL",
                "postal_code": "62704",
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_new_default_address_demotes_the_previous_one() {
    let db = TestDatabase::new().await;
    let app = handlers::router(address_service(&db));

    let user_id = TestDataBuilder::from_test_name("address_default").user_id();
    let first = create_address(&app, user_id, "1 First St", true).await;
    assert!(first.is_default);

    let second = create_address(&app, user_id, "2 Second St", true).await;
    assert!(second.is_default);

    let request = Request::builder()
        .uri(format!("/?user_id={}", user_id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let addresses: Vec<Address> = json_body(response.into_body()).await;
    assert_eq!(addresses.len(), 2);
    // The default comes first and only one address carries the flag
    assert_eq!(addresses[0].id, second.id);
    assert!(addresses[0].is_default);
    assert!(!addresses[1].is_default);
}

#[tokio::test]
async fn test_get_addresses_without_user_id_returns_400() {
    let db = TestDatabase::new().await;
    let app = handlers::router(address_service(&db));

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_address_applies_partial_changes() {
    let db = TestDatabase::new().await;
    let app = handlers::router(address_service(&db));

    let user_id = TestDataBuilder::from_test_name("address_update").user_id();
    let address = create_address(&app, user_id, "12 Main St", false).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", address.id))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "city": "Shelbyville",
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Address = json_body(response.into_body()).await;
    assert_eq!(updated.city, "Shelbyville");
    assert_eq!(updated.street, "12 Main St"); // Untouched
}

#[tokio::test]
async fn test_promoting_an_address_clears_the_other_default() {
    let db = TestDatabase::new().await;
    let app = handlers::router(address_service(&db));

    let user_id = TestDataBuilder::from_test_name("address_promote").user_id();
    let home = create_address(&app, user_id, "1 Home St", true).await;
    let office = create_address(&app, user_id, "2 Office St", false).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", office.id))
        .header("content-type", "application/json")
        .body(Body::from(json!({ "is_default": true }).to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .uri(format!("/?user_id={}", user_id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let addresses: Vec<Address> = json_body(response.into_body()).await;

    let home_after = addresses.iter().find(|a| a.id == home.id).unwrap();
    let office_after = addresses.iter().find(|a| a.id == office.id).unwrap();
    assert!(!home_after.is_default);
    assert!(office_after.is_default);
}

#[tokio::test]
async fn test_update_missing_address_returns_404() {
    let db = TestDatabase::new().await;
    let app = handlers::router(address_service(&db));

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", Uuid::now_v7()))
        .header("content-type", "application/json")
        .body(Body::from(json!({ "city": "Nowhere" }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_address_returns_204_then_404() {
    let db = TestDatabase::new().await;
    let app = handlers::router(address_service(&db));

    let user_id = TestDataBuilder::from_test_name("address_delete").user_id();
    let address = create_address(&app, user_id, "12 Main St", false).await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", address.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", address.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
