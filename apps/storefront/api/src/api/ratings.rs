use axum::Router;
use domain_ratings::{PgRatingRepository, RatingService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgRatingRepository::new(state.db.clone());
    let service = RatingService::new(repository);
    handlers::router(service)
}
