use axum::Router;
use domain_builds::{BuildService, PgBuildRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgBuildRepository::new(state.db.clone());
    let service = BuildService::new(repository);
    handlers::router(service)
}
