//! HTTP handlers for the order API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
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

use crate::error::OrderResult;
use crate::models::{
    AddOrderItem, CreateOrder, Order, OrderItem, OrderQuery, OrderStatus, UpdateOrder,
};
use crate::repository::OrderRepository;
use crate::service::OrderService;

/// OpenAPI documentation for the order API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_orders,
        create_order,
        get_order,
        update_order,
        delete_order,
        get_order_items,
        add_order_item
    ),
    components(
        schemas(
            Order, CreateOrder, UpdateOrder, OrderStatus,
            OrderItem, AddOrderItem, domain_catalog::Product
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Orders", description = "Customer order endpoints")
    )
)]
pub struct ApiDoc;

/// Create the order router with all HTTP endpoints
pub fn router<R: OrderRepository + 'static>(service: OrderService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route(
            "/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/{id}/items", get(get_order_items).post(add_order_item))
        .with_state(shared_service)
}

/// List orders, optionally filtered by customer email and status
#[utoipa::path(
    get,
    path = "",
    tag = "Orders",
    params(OrderQuery),
    responses(
        (status = 200, description = "Matching orders, newest first", body = [Order]),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_orders<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    Query(filter): Query<OrderQuery>,
) -> OrderResult<Json<Vec<Order>>> {
    let orders = service.list_orders(filter).await?;
    Ok(Json(orders))
}

/// Create an order from checkout fields
#[utoipa::path(
    post,
    path = "",
    tag = "Orders",
    request_body = CreateOrder,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_order<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateOrder>,
) -> OrderResult<impl IntoResponse> {
    let order = service.create_order(input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Get an order by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Orders",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "The order", body = Order),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_order<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    UuidPath(id): UuidPath,
) -> OrderResult<Json<Order>> {
    let order = service.get_order(id).await?;
    Ok(Json(order))
}

/// Update an order's checkout fields or status
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Orders",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    request_body = UpdateOrder,
    responses(
        (status = 200, description = "Updated order", body = Order),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_order<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateOrder>,
) -> OrderResult<Json<Order>> {
    let order = service.update_order(id, input).await?;
    Ok(Json(order))
}

/// Delete an order along with its lines
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Orders",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_order<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    UuidPath(id): UuidPath,
) -> OrderResult<impl IntoResponse> {
    service.delete_order(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get an order's product lines
#[utoipa::path(
    get,
    path = "/{id}/items",
    tag = "Orders",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "The order's lines with products embedded", body = [OrderItem]),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_order_items<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    UuidPath(id): UuidPath,
) -> OrderResult<Json<Vec<OrderItem>>> {
    let items = service.order_items(id).await?;
    Ok(Json(items))
}

/// Add a product line to an order
#[utoipa::path(
    post,
    path = "/{id}/items",
    tag = "Orders",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    request_body = AddOrderItem,
    responses(
        (status = 201, description = "Line added to the order", body = OrderItem),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_order_item<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<AddOrderItem>,
) -> OrderResult<impl IntoResponse> {
    let item = service.add_order_item(id, input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}
