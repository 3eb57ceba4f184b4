//! HTTP handlers for the rating API

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::RatingResult;
use crate::models::{CreateRating, ProductRatings, Rating, UpdateRating};
use crate::repository::RatingRepository;
use crate::service::RatingService;

/// OpenAPI documentation for the rating API
#[derive(OpenApi)]
#[openapi(
    paths(get_product_ratings, create_rating, update_rating, delete_rating),
    components(
        schemas(Rating, ProductRatings, CreateRating, UpdateRating),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Ratings", description = "Product rating endpoints")
    )
)]
pub struct ApiDoc;

/// Create the rating router with all HTTP endpoints
pub fn router<R: RatingRepository + 'static>(service: RatingService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/product/{product_id}", get(get_product_ratings))
        .route("/", post(create_rating))
        .route("/{id}", put(update_rating).delete(delete_rating))
        .with_state(shared_service)
}

/// Get a product's ratings newest first, with their average and count.
///
/// A product nobody has rated answers with an empty list and a zero
/// average rather than 404.
#[utoipa::path(
    get,
    path = "/product/{product_id}",
    tag = "Ratings",
    params(
        ("product_id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "The product's ratings and aggregate", body = ProductRatings),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product_ratings<R: RatingRepository>(
    State(service): State<Arc<RatingService<R>>>,
    UuidPath(product_id): UuidPath,
) -> RatingResult<Json<ProductRatings>> {
    let summary = service.get_product_ratings(product_id).await?;
    Ok(Json(summary))
}

/// Rate a product
#[utoipa::path(
    post,
    path = "",
    tag = "Ratings",
    request_body = CreateRating,
    responses(
        (status = 201, description = "Rating created", body = Rating),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_rating<R: RatingRepository>(
    State(service): State<Arc<RatingService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateRating>,
) -> RatingResult<impl IntoResponse> {
    let rating = service.create_rating(input).await?;
    Ok((StatusCode::CREATED, Json(rating)))
}

/// Change the star count or review of a rating
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Ratings",
    params(
        ("id" = Uuid, Path, description = "Rating ID")
    ),
    request_body = UpdateRating,
    responses(
        (status = 200, description = "Updated rating", body = Rating),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_rating<R: RatingRepository>(
    State(service): State<Arc<RatingService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateRating>,
) -> RatingResult<Json<Rating>> {
    let rating = service.update_rating(id, input).await?;
    Ok(Json(rating))
}

/// Delete a rating
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Ratings",
    params(
        ("id" = Uuid, Path, description = "Rating ID")
    ),
    responses(
        (status = 204, description = "Rating deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_rating<R: RatingRepository>(
    State(service): State<Arc<RatingService<R>>>,
    UuidPath(id): UuidPath,
) -> RatingResult<impl IntoResponse> {
    service.delete_rating(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
