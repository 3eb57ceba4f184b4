//! Handler tests for the PC build domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Unlike E2E tests, these test ONLY the PC build domain handlers,
//! not the full application with routing, middleware, etc.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_builds::*;
use domain_catalog::{
    CategoryService, CreateCategory, CreateProduct, PgCategoryRepository, PgProductRepository,
    Product, ProductService,
};
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

fn build_service(db: &TestDatabase) -> BuildService<PgBuildRepository> {
    BuildService::new(PgBuildRepository::new(db.connection()))
}

async fn seed_product(db: &TestDatabase, slug: &str) -> Product {
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
            price: 29900,
            rating: None,
            manufacturer: "Airon".to_string(),
            in_stock: None,
            category_id: category.id,
        })
        .await
        .unwrap()
}

async fn create_build(app: &axum::Router, body: serde_json::Value) -> PcBuild {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_build_resolves_its_components() {
    let db = TestDatabase::new().await;
    let app = handlers::router(build_service(&db));
    let cpu = seed_product(&db, "build-create-cpu").await;
    let gpu = seed_product(&db, "build-create-gpu").await;

    let build = create_build(
        &app,
        json!({
            "usage": "gaming",
            "processor_id": cpu.id,
            "graphic_card_id": gpu.id,
        }),
    )
    .await;

    assert_eq!(build.usage, PcUsage::Gaming);
    assert_eq!(build.processor.as_ref().map(|p| p.id), Some(cpu.id));
    assert_eq!(build.graphic_card.as_ref().map(|p| p.id), Some(gpu.id));
    assert!(build.motherboard.is_none()); // Empty slot
    assert!(build.ram_id.is_none());
}

#[tokio::test]
async fn test_create_build_rejects_unknown_usage() {
    let db = TestDatabase::new().await;
    let app = handlers::router(build_service(&db));

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "usage": "flying" }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_build_with_unknown_component_returns_404() {
    let db = TestDatabase::new().await;
    let app = handlers::router(build_service(&db));

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "usage": "gaming",
                "processor_id": Uuid::now_v7(),
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_builds_paginates_twelve_per_page() {
    let db = TestDatabase::new().await;
    let app = handlers::router(build_service(&db));

    for _ in 0..13 {
        create_build(&app, json!({ "usage": "custom" })).await;
    }

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let first_page: Vec<PcBuild> = json_body(response.into_body()).await;
    assert_eq!(first_page.len(), 12);

    let request = Request::builder()
        .uri("/?page=2")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let second_page: Vec<PcBuild> = json_body(response.into_body()).await;
    assert_eq!(second_page.len(), 1);
}

#[tokio::test]
async fn test_list_builds_filters_by_usage() {
    let db = TestDatabase::new().await;
    let app = handlers::router(build_service(&db));

    create_build(&app, json!({ "usage": "gaming" })).await;
    create_build(&app, json!({ "usage": "gaming" })).await;
    create_build(&app, json!({ "usage": "student" })).await;

    let request = Request::builder()
        .uri("/?usage=gaming")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let builds: Vec<PcBuild> = json_body(response.into_body()).await;
    assert_eq!(builds.len(), 2);
    assert!(builds.iter().all(|b| b.usage == PcUsage::Gaming));

    let request = Request::builder()
        .uri("/?usage=flying")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_build_returns_components_or_404() {
    let db = TestDatabase::new().await;
    let app = handlers::router(build_service(&db));
    let ssd = seed_product(&db, "build-get-ssd").await;

    let created = create_build(
        &app,
        json!({
            "usage": "development",
            "primary_storage_id": ssd.id,
        }),
    )
    .await;

    let request = Request::builder()
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let build: PcBuild = json_body(response.into_body()).await;
    assert_eq!(build.id, created.id);
    assert_eq!(build.primary_storage.map(|p| p.id), Some(ssd.id));

    let request = Request::builder()
        .uri(format!("/{}", Uuid::now_v7()))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_builds_by_usage_distinguishes_empty_from_invalid() {
    let db = TestDatabase::new().await;
    let app = handlers::router(build_service(&db));

    create_build(&app, json!({ "usage": "gaming" })).await;

    let request = Request::builder()
        .uri("/usage/gaming")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let builds: Vec<PcBuild> = json_body(response.into_body()).await;
    assert_eq!(builds.len(), 1);

    // Valid profile with no builds
    let request = Request::builder()
        .uri("/usage/workstation")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Not a profile at all
    let request = Request::builder()
        .uri("/usage/flying")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_build_keeps_absent_slots() {
    let db = TestDatabase::new().await;
    let app = handlers::router(build_service(&db));
    let cpu = seed_product(&db, "build-update-cpu").await;
    let ram = seed_product(&db, "build-update-ram").await;

    let created = create_build(
        &app,
        json!({
            "usage": "gaming",
            "processor_id": cpu.id,
        }),
    )
    .await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", created.id))
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "usage": "workstation",
                "ram_id": ram.id,
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: PcBuild = json_body(response.into_body()).await;
    assert_eq!(updated.usage, PcUsage::Workstation);
    assert_eq!(updated.ram.map(|p| p.id), Some(ram.id));
    assert_eq!(updated.processor.map(|p| p.id), Some(cpu.id)); // Kept
}

#[tokio::test]
async fn test_update_missing_build_returns_404() {
    let db = TestDatabase::new().await;
    let app = handlers::router(build_service(&db));

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", Uuid::now_v7()))
        .header("content-type", "application/json")
        .body(Body::from(json!({ "usage": "mini" }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_build_returns_204_then_404() {
    let db = TestDatabase::new().await;
    let app = handlers::router(build_service(&db));

    let created = create_build(&app, json!({ "usage": "budget" })).await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
