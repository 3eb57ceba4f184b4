//! HTTP handlers for the wishlist API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::WishlistResult;
use crate::models::{AddToWishlist, WishlistItem, WishlistQuery};
use crate::repository::WishlistRepository;
use crate::service::WishlistService;

/// OpenAPI documentation for the wishlist API
#[derive(OpenApi)]
#[openapi(
    paths(get_wishlist, add_to_wishlist, remove_from_wishlist),
    components(
        schemas(WishlistItem, AddToWishlist, domain_catalog::Product),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Wishlist", description = "Saved-product wishlist endpoints")
    )
)]
pub struct ApiDoc;

/// Create the wishlist router with all HTTP endpoints
pub fn router<R: WishlistRepository + 'static>(service: WishlistService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_wishlist).post(add_to_wishlist))
        .route("/{id}", delete(remove_from_wishlist))
        .with_state(shared_service)
}

/// Get a user's wishlist
#[utoipa::path(
    get,
    path = "",
    tag = "Wishlist",
    params(WishlistQuery),
    responses(
        (status = 200, description = "The user's saved products", body = [WishlistItem]),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_wishlist<R: WishlistRepository>(
    State(service): State<Arc<WishlistService<R>>>,
    Query(query): Query<WishlistQuery>,
) -> WishlistResult<Json<Vec<WishlistItem>>> {
    let items = service.get_wishlist(query.user_id).await?;
    Ok(Json(items))
}

/// Save a product to a wishlist
#[utoipa::path(
    post,
    path = "",
    tag = "Wishlist",
    request_body = AddToWishlist,
    responses(
        (status = 201, description = "Product saved to wishlist", body = WishlistItem),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_to_wishlist<R: WishlistRepository>(
    State(service): State<Arc<WishlistService<R>>>,
    ValidatedJson(input): ValidatedJson<AddToWishlist>,
) -> WishlistResult<impl IntoResponse> {
    let item = service.add_to_wishlist(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Remove one item from a wishlist
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Wishlist",
    params(
        ("id" = Uuid, Path, description = "Wishlist item ID")
    ),
    responses(
        (status = 204, description = "Item removed from wishlist"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_from_wishlist<R: WishlistRepository>(
    State(service): State<Arc<WishlistService<R>>>,
    UuidPath(id): UuidPath,
) -> WishlistResult<impl IntoResponse> {
    service.remove_from_wishlist(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
