//! Handler tests for the wishlist domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Unlike E2E tests, these test ONLY the wishlist domain handlers,
//! not the full application with routing, middleware, etc.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_catalog::{
    CategoryService, CreateCategory, CreateProduct, PgCategoryRepository, PgProductRepository,
    Product, ProductService,
};
use domain_wishlists::*;
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

fn wishlist_service(db: &TestDatabase) -> WishlistService<PgWishlistRepository> {
    WishlistService::new(PgWishlistRepository::new(db.connection()))
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

async fn save_item(app: &axum::Router, user_id: Uuid, product_id: Uuid) -> WishlistItem {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "user_id": user_id,
                "product_id": product_id,
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_add_to_wishlist_returns_201_with_product_embedded() {
    let db = TestDatabase::new().await;
    let product = seed_product(&db, "wish-add", 24900).await;
    let app = handlers::router(wishlist_service(&db));

    let user_id = TestDataBuilder::from_test_name("wishlist_add").user_id();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "user_id": user_id,
                "product_id": product.id,
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let item: WishlistItem = json_body(response.into_body()).await;
    assert_eq!(item.user_id, user_id);
    let embedded = item.product.as_ref().unwrap();
    assert_eq!(embedded.id, product.id);
    assert_eq!(
        embedded.category.as_ref().unwrap().name,
        "wish-add-category"
    );
}

#[tokio::test]
async fn test_saving_the_same_product_twice_returns_409() {
    let db = TestDatabase::new().await;
    let product = seed_product(&db, "wish-dup", 24900).await;
    let app = handlers::router(wishlist_service(&db));

    let user_id = TestDataBuilder::from_test_name("wishlist_dup").user_id();
    save_item(&app, user_id, product.id).await;

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "user_id": user_id,
                "product_id": product.id,
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_add_with_unknown_product_returns_404() {
    let db = TestDatabase::new().await;
    let app = handlers::router(wishlist_service(&db));

    let user_id = TestDataBuilder::from_test_name("wishlist_404").user_id();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "user_id": user_id,
                "product_id": Uuid::now_v7(),
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_wishlist_lists_saved_products() {
    let db = TestDatabase::new().await;
    let laptop = seed_product(&db, "wish-laptop", 149900).await;
    let mouse = seed_product(&db, "wish-mouse", 4900).await;
    let app = handlers::router(wishlist_service(&db));

    let user_id = TestDataBuilder::from_test_name("wishlist_list").user_id();
    save_item(&app, user_id, laptop.id).await;
    save_item(&app, user_id, mouse.id).await;

    // A different user's save stays out of the listing
    let other_user = TestDataBuilder::from_test_name("wishlist_list_other").user_id();
    save_item(&app, other_user, laptop.id).await;

    let request = Request::builder()
        .uri(format!("/?user_id={}", user_id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let items: Vec<WishlistItem> = json_body(response.into_body()).await;
    assert_eq!(items.len(), 2);
    assert!(items
        .iter()
        .all(|item| item.product.as_ref().unwrap().category.is_some()));
}

#[tokio::test]
async fn test_get_wishlist_without_user_id_returns_400() {
    let db = TestDatabase::new().await;
    let app = handlers::router(wishlist_service(&db));

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_remove_from_wishlist_returns_204_then_404() {
    let db = TestDatabase::new().await;
    let product = seed_product(&db, "wish-remove", 9900).await;
    let app = handlers::router(wishlist_service(&db));

    let user_id = TestDataBuilder::from_test_name("wishlist_remove").user_id();
    let item = save_item(&app, user_id, product.id).await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", item.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", item.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
