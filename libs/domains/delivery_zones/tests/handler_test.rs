//! Handler tests for the delivery zone domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Unlike E2E tests, these test ONLY the delivery zone domain handlers,
//! not the full application with routing, middleware, etc.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_delivery_zones::*;
use http_body_util::BodyExt;
use serde_json::json;
use test_utils::TestDatabase;
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn zone_service(db: &TestDatabase) -> DeliveryZoneService<PgDeliveryZoneRepository> {
    DeliveryZoneService::new(PgDeliveryZoneRepository::new(db.connection()))
}

async fn create_zone(
    app: &axum::Router,
    name: &str,
    codes: &[&str],
    is_active: bool,
) -> DeliveryZone {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "name": name,
                "postal_codes": codes,
                "is_active": is_active,
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_zone_returns_201_with_defaults() {
    let db = TestDatabase::new().await;
    let app = handlers::router(zone_service(&db));

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "name": "Downtown",
                "postal_codes": ["62704", "62701"],
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let zone: DeliveryZone = json_body(response.into_body()).await;
    assert_eq!(zone.name, "Downtown");
    assert_eq!(zone.postal_codes, vec!["62704", "62701"]);
    assert_eq!(zone.delivery_fee, 0); // Default
    assert!(zone.is_active); // Default
}

#[tokio::test]
async fn test_create_zone_requires_postal_codes() {
    let db = TestDatabase::new().await;
    let app = handlers::router(zone_service(&db));

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "name": "Nowhere",
                "postal_codes": [],
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_zones_returns_only_active_ones() {
    let db = TestDatabase::new().await;
    let app = handlers::router(zone_service(&db));

    create_zone(&app, "Downtown", &["62704"], true).await;
    create_zone(&app, "Retired", &["99999"], false).await;

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let zones: Vec<DeliveryZone> = json_body(response.into_body()).await;
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].name, "Downtown");
}

#[tokio::test]
async fn test_check_covered_postal_code_returns_the_zone() {
    let db = TestDatabase::new().await;
    let app = handlers::router(zone_service(&db));

    create_zone(&app, "Downtown", &["62704", "62701"], true).await;

    let request = Request::builder()
        .uri("/check?postal_code=62701")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let outcome: Serviceability = json_body(response.into_body()).await;
    assert!(outcome.serviceable);
    assert_eq!(outcome.zone.unwrap().name, "Downtown");
    assert!(outcome.message.is_none());
}

#[tokio::test]
async fn test_check_uncovered_postal_code_still_answers_200() {
    let db = TestDatabase::new().await;
    let app = handlers::router(zone_service(&db));

    // Inactive zone coverage does not count
    create_zone(&app, "Retired", &["62704"], false).await;

    let request = Request::builder()
        .uri("/check?postal_code=62704")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let outcome: Serviceability = json_body(response.into_body()).await;
    assert!(!outcome.serviceable);
    assert!(outcome.zone.is_none());
    assert_eq!(
        outcome.message.as_deref(),
        Some("This area is not currently serviceable")
    );
}

#[tokio::test]
async fn test_check_without_postal_code_returns_400() {
    let db = TestDatabase::new().await;
    let app = handlers::router(zone_service(&db));

    let request = Request::builder()
        .uri("/check")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_zone_replaces_postal_codes() {
    let db = TestDatabase::new().await;
    let app = handlers::router(zone_service(&db));

    let zone = create_zone(&app, "Downtown", &["62704"], true).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", zone.id))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "postal_codes": ["62704", "62702"],
                "delivery_fee": 500,
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: DeliveryZone = json_body(response.into_body()).await;
    assert_eq!(updated.postal_codes, vec!["62704", "62702"]);
    assert_eq!(updated.delivery_fee, 500);
    assert_eq!(updated.name, "Downtown"); // Untouched
}

#[tokio::test]
async fn test_update_missing_zone_returns_404() {
    let db = TestDatabase::new().await;
    let app = handlers::router(zone_service(&db));

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", Uuid::now_v7()))
        .header("content-type", "application/json")
        .body(Body::from(json!({ "delivery_fee": 100 }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_zone_returns_204_then_404() {
    let db = TestDatabase::new().await;
    let app = handlers::router(zone_service(&db));

    let zone = create_zone(&app, "Downtown", &["62704"], true).await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", zone.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", zone.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
