use axum::Router;
use domain_wishlists::{PgWishlistRepository, WishlistService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgWishlistRepository::new(state.db.clone());
    let service = WishlistService::new(repository);
    handlers::router(service)
}
