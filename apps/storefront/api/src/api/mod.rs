use axum::Router;

pub mod addresses;
pub mod cart;
pub mod categories;
pub mod delivery_zones;
pub mod health;
pub mod notifications;
pub mod orders;
pub mod pc_builds;
pub mod products;
pub mod ratings;
pub mod wishlist;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// This function takes a reference to AppState and initializes all services.
/// Returns a stateless Router (all sub-routers have state already applied).
/// Only Arc pointer clones remain when domains extract db connections (cheap).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/categories", categories::router(state))
        .nest("/cart", cart::router(state))
        .nest("/wishlist", wishlist::router(state))
        .nest("/addresses", addresses::router(state))
        .nest("/orders", orders::router(state))
        .nest("/delivery-zones", delivery_zones::router(state))
        .nest("/notifications", notifications::router(state))
        .nest("/ratings", ratings::router(state))
        .nest("/pc-builds", pc_builds::router(state))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`. The /ready endpoint checks the database connection.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
