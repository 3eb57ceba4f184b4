use axum::Router;
use domain_notifications::{NotificationService, PgNotificationRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgNotificationRepository::new(state.db.clone());
    let service = NotificationService::new(repository);
    handlers::router(service)
}
