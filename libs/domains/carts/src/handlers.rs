//! HTTP handlers for the cart API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
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

use crate::error::CartResult;
use crate::models::{
    AddToCart, CartItem, CartQuery, CartResponse, ClearCart, ClearedCart, RemovedFromCart,
    UpdateCartItem,
};
use crate::repository::CartRepository;
use crate::service::CartService;

/// OpenAPI documentation for the cart API
#[derive(OpenApi)]
#[openapi(
    paths(get_cart, add_to_cart, update_cart_item, remove_from_cart, clear_cart),
    components(
        schemas(
            CartItem, CartResponse, AddToCart, UpdateCartItem,
            ClearCart, ClearedCart, RemovedFromCart, domain_catalog::Product
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Cart", description = "Shopping cart endpoints")
    )
)]
pub struct ApiDoc;

/// Create the cart router with all HTTP endpoints
pub fn router<R: CartRepository + 'static>(service: CartService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/clear", post(clear_cart))
        .route("/", get(get_cart).post(add_to_cart))
        .route("/update", patch(update_cart_item))
        .route("/{id}", delete(remove_from_cart))
        .with_state(shared_service)
}

/// Get a user's cart with its total
#[utoipa::path(
    get,
    path = "",
    tag = "Cart",
    params(CartQuery),
    responses(
        (status = 200, description = "The user's cart items and total", body = CartResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_cart<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    Query(query): Query<CartQuery>,
) -> CartResult<Json<CartResponse>> {
    let cart = service.get_cart(query.user_id).await?;
    Ok(Json(cart))
}

/// Add a product to a cart.
///
/// Adding a product already in the cart increments its quantity and
/// returns 200; a fresh row returns 201.
#[utoipa::path(
    post,
    path = "",
    tag = "Cart",
    request_body = AddToCart,
    responses(
        (status = 201, description = "Item added to cart", body = CartItem),
        (status = 200, description = "Existing item quantity increased", body = CartItem),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_to_cart<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    ValidatedJson(input): ValidatedJson<AddToCart>,
) -> CartResult<impl IntoResponse> {
    let addition = service.add_to_cart(input).await?;

    let status = if addition.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(addition.item)))
}

/// Change a cart item quantity; zero or less removes the item
#[utoipa::path(
    patch,
    path = "/update",
    tag = "Cart",
    request_body = UpdateCartItem,
    responses(
        (status = 200, description = "Updated item, or a removal confirmation for quantity <= 0", body = CartItem),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_cart_item<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    ValidatedJson(input): ValidatedJson<UpdateCartItem>,
) -> CartResult<Response> {
    match service.update_cart_item(input).await? {
        Some(item) => Ok(Json(item).into_response()),
        None => Ok(Json(RemovedFromCart {
            message: "Item removed from cart".to_string(),
        })
        .into_response()),
    }
}

/// Remove one item from a cart
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Cart",
    params(
        ("id" = Uuid, Path, description = "Cart item ID")
    ),
    responses(
        (status = 204, description = "Item removed from cart"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_from_cart<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    UuidPath(id): UuidPath,
) -> CartResult<impl IntoResponse> {
    service.remove_from_cart(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove every item of a user's cart
#[utoipa::path(
    post,
    path = "/clear",
    tag = "Cart",
    request_body = ClearCart,
    responses(
        (status = 200, description = "Cart cleared", body = ClearedCart),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn clear_cart<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    ValidatedJson(input): ValidatedJson<ClearCart>,
) -> CartResult<Json<ClearedCart>> {
    let removed = service.clear_cart(input).await?;
    Ok(Json(ClearedCart { removed }))
}
