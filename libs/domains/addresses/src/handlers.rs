//! HTTP handlers for the address API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
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

use crate::error::AddressResult;
use crate::models::{Address, AddressQuery, CreateAddress, UpdateAddress};
use crate::repository::AddressRepository;
use crate::service::AddressService;

/// OpenAPI documentation for the address API
#[derive(OpenApi)]
#[openapi(
    paths(get_addresses, create_address, update_address, delete_address),
    components(
        schemas(Address, CreateAddress, UpdateAddress),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Addresses", description = "Delivery address endpoints")
    )
)]
pub struct ApiDoc;

/// Create the address router with all HTTP endpoints
pub fn router<R: AddressRepository + 'static>(service: AddressService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_addresses).post(create_address))
        .route("/{id}", put(update_address).delete(delete_address))
        .with_state(shared_service)
}

/// Get a user's addresses, default address first
#[utoipa::path(
    get,
    path = "",
    tag = "Addresses",
    params(AddressQuery),
    responses(
        (status = 200, description = "The user's addresses", body = [Address]),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_addresses<R: AddressRepository>(
    State(service): State<Arc<AddressService<R>>>,
    Query(query): Query<AddressQuery>,
) -> AddressResult<Json<Vec<Address>>> {
    let addresses = service.get_addresses(query.user_id).await?;
    Ok(Json(addresses))
}

/// Create an address.
///
/// Marking the new address as default clears the flag on the user's
/// other addresses.
#[utoipa::path(
    post,
    path = "",
    tag = "Addresses",
    request_body = CreateAddress,
    responses(
        (status = 201, description = "Address created", body = Address),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_address<R: AddressRepository>(
    State(service): State<Arc<AddressService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateAddress>,
) -> AddressResult<impl IntoResponse> {
    let address = service.create_address(input).await?;
    Ok((StatusCode::CREATED, Json(address)))
}

/// Partially update an address
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Addresses",
    params(
        ("id" = Uuid, Path, description = "Address ID")
    ),
    request_body = UpdateAddress,
    responses(
        (status = 200, description = "Updated address", body = Address),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_address<R: AddressRepository>(
    State(service): State<Arc<AddressService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateAddress>,
) -> AddressResult<Json<Address>> {
    let address = service.update_address(id, input).await?;
    Ok(Json(address))
}

/// Delete an address
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Addresses",
    params(
        ("id" = Uuid, Path, description = "Address ID")
    ),
    responses(
        (status = 204, description = "Address deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_address<R: AddressRepository>(
    State(service): State<Arc<AddressService<R>>>,
    UuidPath(id): UuidPath,
) -> AddressResult<impl IntoResponse> {
    service.delete_address(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
