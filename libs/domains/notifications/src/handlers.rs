//! HTTP handlers for the notification API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
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

use crate::error::NotificationResult;
use crate::models::{
    CreateNotification, MarkAllRead, MarkRead, MarkedRead, Notification, NotificationQuery,
};
use crate::repository::NotificationRepository;
use crate::service::NotificationService;

/// OpenAPI documentation for the notification API
#[derive(OpenApi)]
#[openapi(
    paths(
        get_notifications,
        create_notification,
        mark_notification_read,
        mark_all_notifications_read
    ),
    components(
        schemas(Notification, CreateNotification, MarkRead, MarkAllRead, MarkedRead),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Notifications", description = "In-app notification endpoints")
    )
)]
pub struct ApiDoc;

/// Create the notification router with all HTTP endpoints.
///
/// The bulk route registers before the id route so "mark-all-read" is
/// never parsed as a notification id.
pub fn router<R: NotificationRepository + 'static>(service: NotificationService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/mark-all-read", post(mark_all_notifications_read))
        .route("/", get(get_notifications).post(create_notification))
        .route("/{id}", patch(mark_notification_read))
        .with_state(shared_service)
}

/// Get a user's notifications, newest first
#[utoipa::path(
    get,
    path = "",
    tag = "Notifications",
    params(NotificationQuery),
    responses(
        (status = 200, description = "The user's notifications", body = [Notification]),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_notifications<R: NotificationRepository>(
    State(service): State<Arc<NotificationService<R>>>,
    Query(query): Query<NotificationQuery>,
) -> NotificationResult<Json<Vec<Notification>>> {
    let notifications = service
        .get_notifications(query.user_id, query.is_read)
        .await?;
    Ok(Json(notifications))
}

/// Create a notification
#[utoipa::path(
    post,
    path = "",
    tag = "Notifications",
    request_body = CreateNotification,
    responses(
        (status = 201, description = "Notification created", body = Notification),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_notification<R: NotificationRepository>(
    State(service): State<Arc<NotificationService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateNotification>,
) -> NotificationResult<impl IntoResponse> {
    let notification = service.create_notification(input).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

/// Set the read flag on one notification.
///
/// An empty body marks it read; `{"is_read": false}` marks it unread.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Notifications",
    params(
        ("id" = Uuid, Path, description = "Notification ID")
    ),
    request_body = MarkRead,
    responses(
        (status = 200, description = "Updated notification", body = Notification),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn mark_notification_read<R: NotificationRepository>(
    State(service): State<Arc<NotificationService<R>>>,
    UuidPath(id): UuidPath,
    Json(input): Json<MarkRead>,
) -> NotificationResult<Json<Notification>> {
    let notification = service.mark_read(id, input).await?;
    Ok(Json(notification))
}

/// Mark every unread notification of one user read
#[utoipa::path(
    post,
    path = "/mark-all-read",
    tag = "Notifications",
    request_body = MarkAllRead,
    responses(
        (status = 200, description = "Count of notifications updated", body = MarkedRead),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn mark_all_notifications_read<R: NotificationRepository>(
    State(service): State<Arc<NotificationService<R>>>,
    Json(input): Json<MarkAllRead>,
) -> NotificationResult<Json<MarkedRead>> {
    let result = service.mark_all_read(input).await?;
    Ok(Json(result))
}
