//! HTTP handlers for the delivery zone API

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

use crate::error::DeliveryZoneResult;
use crate::models::{
    CreateDeliveryZone, DeliveryZone, Serviceability, ServiceabilityQuery, UpdateDeliveryZone,
};
use crate::repository::DeliveryZoneRepository;
use crate::service::DeliveryZoneService;

/// OpenAPI documentation for the delivery zone API
#[derive(OpenApi)]
#[openapi(
    paths(list_zones, check_serviceability, create_zone, update_zone, delete_zone),
    components(
        schemas(DeliveryZone, CreateDeliveryZone, UpdateDeliveryZone, Serviceability),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Delivery Zones", description = "Delivery area endpoints")
    )
)]
pub struct ApiDoc;

/// Create the delivery zone router with all HTTP endpoints
pub fn router<R: DeliveryZoneRepository + 'static>(service: DeliveryZoneService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_zones).post(create_zone))
        .route("/check", get(check_serviceability))
        .route("/{id}", put(update_zone).delete(delete_zone))
        .with_state(shared_service)
}

/// List all active delivery zones
#[utoipa::path(
    get,
    path = "",
    tag = "Delivery Zones",
    responses(
        (status = 200, description = "Active delivery zones", body = [DeliveryZone]),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_zones<R: DeliveryZoneRepository>(
    State(service): State<Arc<DeliveryZoneService<R>>>,
) -> DeliveryZoneResult<Json<Vec<DeliveryZone>>> {
    let zones = service.list_zones().await?;
    Ok(Json(zones))
}

/// Check whether an active zone delivers to a postal code.
///
/// Covered and uncovered areas both answer 200; the body says which.
#[utoipa::path(
    get,
    path = "/check",
    tag = "Delivery Zones",
    params(ServiceabilityQuery),
    responses(
        (status = 200, description = "Serviceability of the area", body = Serviceability),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn check_serviceability<R: DeliveryZoneRepository>(
    State(service): State<Arc<DeliveryZoneService<R>>>,
    Query(query): Query<ServiceabilityQuery>,
) -> DeliveryZoneResult<Json<Serviceability>> {
    let outcome = service.check_serviceability(query.postal_code).await?;
    Ok(Json(outcome))
}

/// Create a delivery zone
#[utoipa::path(
    post,
    path = "",
    tag = "Delivery Zones",
    request_body = CreateDeliveryZone,
    responses(
        (status = 201, description = "Delivery zone created", body = DeliveryZone),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_zone<R: DeliveryZoneRepository>(
    State(service): State<Arc<DeliveryZoneService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateDeliveryZone>,
) -> DeliveryZoneResult<impl IntoResponse> {
    let zone = service.create_zone(input).await?;
    Ok((StatusCode::CREATED, Json(zone)))
}

/// Partially update a delivery zone
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Delivery Zones",
    params(
        ("id" = Uuid, Path, description = "Delivery zone ID")
    ),
    request_body = UpdateDeliveryZone,
    responses(
        (status = 200, description = "Updated delivery zone", body = DeliveryZone),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_zone<R: DeliveryZoneRepository>(
    State(service): State<Arc<DeliveryZoneService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateDeliveryZone>,
) -> DeliveryZoneResult<Json<DeliveryZone>> {
    let zone = service.update_zone(id, input).await?;
    Ok(Json(zone))
}

/// Delete a delivery zone
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Delivery Zones",
    params(
        ("id" = Uuid, Path, description = "Delivery zone ID")
    ),
    responses(
        (status = 204, description = "Delivery zone deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_zone<R: DeliveryZoneRepository>(
    State(service): State<Arc<DeliveryZoneService<R>>>,
    UuidPath(id): UuidPath,
) -> DeliveryZoneResult<impl IntoResponse> {
    service.delete_zone(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
