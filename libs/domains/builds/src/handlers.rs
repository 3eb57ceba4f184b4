//! HTTP handlers for the PC build API

use axum::{
    extract::{Path, Query, State},
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

use crate::error::BuildResult;
use crate::models::{BuildQuery, CreatePcBuild, PcBuild, PcUsage, UpdatePcBuild};
use crate::repository::BuildRepository;
use crate::service::BuildService;

/// OpenAPI documentation for the PC build API
#[derive(OpenApi)]
#[openapi(
    paths(
        get_builds,
        get_build,
        get_builds_by_usage,
        create_build,
        update_build,
        delete_build
    ),
    components(
        schemas(
            PcBuild,
            PcUsage,
            CreatePcBuild,
            UpdatePcBuild,
            domain_catalog::Product
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "PC Builds", description = "PC configuration endpoints")
    )
)]
pub struct ApiDoc;

/// Create the PC build router with all HTTP endpoints
pub fn router<R: BuildRepository + 'static>(service: BuildService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/usage/{usage}", get(get_builds_by_usage))
        .route("/", get(get_builds).post(create_build))
        .route(
            "/{id}",
            get(get_build).put(update_build).delete(delete_build),
        )
        .with_state(shared_service)
}

/// Get one page of PC builds with their components resolved
#[utoipa::path(
    get,
    path = "",
    tag = "PC Builds",
    params(BuildQuery),
    responses(
        (status = 200, description = "One page of builds", body = [PcBuild]),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_builds<R: BuildRepository>(
    State(service): State<Arc<BuildService<R>>>,
    Query(query): Query<BuildQuery>,
) -> BuildResult<Json<Vec<PcBuild>>> {
    let builds = service.get_builds(query).await?;
    Ok(Json(builds))
}

/// Get one PC build with its components resolved
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "PC Builds",
    params(
        ("id" = Uuid, Path, description = "Build ID")
    ),
    responses(
        (status = 200, description = "The build", body = PcBuild),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_build<R: BuildRepository>(
    State(service): State<Arc<BuildService<R>>>,
    UuidPath(id): UuidPath,
) -> BuildResult<Json<PcBuild>> {
    let build = service.get_build(id).await?;
    Ok(Json(build))
}

/// Get every PC build for one usage profile.
///
/// An unknown profile is a 400; a known profile nobody has built for
/// answers 404.
#[utoipa::path(
    get,
    path = "/usage/{usage}",
    tag = "PC Builds",
    params(
        ("usage" = String, Path, description = "Usage profile, e.g. gaming")
    ),
    responses(
        (status = 200, description = "Builds for the profile", body = [PcBuild]),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_builds_by_usage<R: BuildRepository>(
    State(service): State<Arc<BuildService<R>>>,
    Path(usage): Path<String>,
) -> BuildResult<Json<Vec<PcBuild>>> {
    let builds = service.get_builds_by_usage(&usage).await?;
    Ok(Json(builds))
}

/// Create a PC build
#[utoipa::path(
    post,
    path = "",
    tag = "PC Builds",
    request_body = CreatePcBuild,
    responses(
        (status = 201, description = "Build created", body = PcBuild),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_build<R: BuildRepository>(
    State(service): State<Arc<BuildService<R>>>,
    ValidatedJson(input): ValidatedJson<CreatePcBuild>,
) -> BuildResult<impl IntoResponse> {
    let build = service.create_build(input).await?;
    Ok((StatusCode::CREATED, Json(build)))
}

/// Change the usage profile or component slots of a build
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "PC Builds",
    params(
        ("id" = Uuid, Path, description = "Build ID")
    ),
    request_body = UpdatePcBuild,
    responses(
        (status = 200, description = "Updated build", body = PcBuild),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_build<R: BuildRepository>(
    State(service): State<Arc<BuildService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdatePcBuild>,
) -> BuildResult<Json<PcBuild>> {
    let build = service.update_build(id, input).await?;
    Ok(Json(build))
}

/// Delete a PC build
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "PC Builds",
    params(
        ("id" = Uuid, Path, description = "Build ID")
    ),
    responses(
        (status = 204, description = "Build deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_build<R: BuildRepository>(
    State(service): State<Arc<BuildService<R>>>,
    UuidPath(id): UuidPath,
) -> BuildResult<impl IntoResponse> {
    service.delete_build(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
