//! Handler tests for the rating domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Unlike E2E tests, these test ONLY the rating domain handlers,
//! not the full application with routing, middleware, etc.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_catalog::{
    CategoryService, CreateCategory, CreateProduct, PgCategoryRepository, PgProductRepository,
    Product, ProductService,
};
use domain_ratings::*;
use http_body_util::BodyExt;
use serde_json::json;
use test_utils::{TestDataBuilder, TestDatabase};
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn rating_service(db: &TestDatabase) -> RatingService<PgRatingRepository> {
    RatingService::new(PgRatingRepository::new(db.connection()))
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
            price: 49900,
            rating: None,
            manufacturer: "Airon".to_string(),
            in_stock: None,
            category_id: category.id,
        })
        .await
        .unwrap()
}

async fn rate_product(
    app: &axum::Router,
    product_id: Uuid,
    user_id: Uuid,
    stars: i32,
    review: Option<&str>,
) -> Rating {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "product_id": product_id,
                "user_id": user_id,
                "rating": stars,
                "review": review,
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_rating_returns_201() {
    let db = TestDatabase::new().await;
    let app = handlers::router(rating_service(&db));
    let product = seed_product(&db, "rating-create").await;
    let user_id = TestDataBuilder::from_test_name("rating-create").user_id();

    let rating = rate_product(&app, product.id, user_id, 5, Some("Superb")).await;

    assert_eq!(rating.product_id, product.id);
    assert_eq!(rating.rating, 5);
    assert_eq!(rating.review.as_deref(), Some("Superb"));
}

#[tokio::test]
async fn test_create_rating_rejects_six_stars() {
    let db = TestDatabase::new().await;
    let app = handlers::router(rating_service(&db));
    let product = seed_product(&db, "rating-six").await;

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "product_id": product.id,
                "user_id": Uuid::now_v7(),
                "rating": 6,
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rating_unknown_product_returns_404() {
    let db = TestDatabase::new().await;
    let app = handlers::router(rating_service(&db));

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "product_id": Uuid::now_v7(),
                "user_id": Uuid::now_v7(),
                "rating": 4,
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_ratings_aggregate_newest_first() {
    let db = TestDatabase::new().await;
    let app = handlers::router(rating_service(&db));
    let product = seed_product(&db, "rating-list").await;
    let other = seed_product(&db, "rating-list-other").await;

    rate_product(&app, product.id, Uuid::now_v7(), 2, None).await;
    rate_product(&app, product.id, Uuid::now_v7(), 5, Some("Great")).await;
    rate_product(&app, other.id, Uuid::now_v7(), 1, None).await;

    let request = Request::builder()
        .uri(format!("/product/{}", product.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let summary: ProductRatings = json_body(response.into_body()).await;
    assert_eq!(summary.total_ratings, 2);
    assert_eq!(summary.average_rating, 3.5);
    assert_eq!(summary.ratings[0].rating, 5); // Newest first
    assert_eq!(summary.ratings[1].rating, 2);
}

#[tokio::test]
async fn test_unrated_product_answers_empty_aggregate() {
    let db = TestDatabase::new().await;
    let app = handlers::router(rating_service(&db));

    let request = Request::builder()
        .uri(format!("/product/{}", Uuid::now_v7()))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let summary: ProductRatings = json_body(response.into_body()).await;
    assert!(summary.ratings.is_empty());
    assert_eq!(summary.average_rating, 0.0);
    assert_eq!(summary.total_ratings, 0);
}

#[tokio::test]
async fn test_update_rating_keeps_absent_fields() {
    let db = TestDatabase::new().await;
    let app = handlers::router(rating_service(&db));
    let product = seed_product(&db, "rating-update").await;

    let rating = rate_product(&app, product.id, Uuid::now_v7(), 2, Some("Meh")).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", rating.id))
        .header("content-type", "application/json")
        .body(Body::from(json!({ "rating": 4 }).to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Rating = json_body(response.into_body()).await;
    assert_eq!(updated.rating, 4);
    assert_eq!(updated.review.as_deref(), Some("Meh")); // Untouched
}

#[tokio::test]
async fn test_update_missing_rating_returns_404() {
    let db = TestDatabase::new().await;
    let app = handlers::router(rating_service(&db));

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", Uuid::now_v7()))
        .header("content-type", "application/json")
        .body(Body::from(json!({ "rating": 3 }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_rating_returns_204_then_404() {
    let db = TestDatabase::new().await;
    let app = handlers::router(rating_service(&db));
    let product = seed_product(&db, "rating-delete").await;

    let rating = rate_product(&app, product.id, Uuid::now_v7(), 3, None).await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", rating.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", rating.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
