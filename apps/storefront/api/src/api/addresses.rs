use axum::Router;
use domain_addresses::{AddressService, PgAddressRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgAddressRepository::new(state.db.clone());
    let service = AddressService::new(repository);
    handlers::router(service)
}
