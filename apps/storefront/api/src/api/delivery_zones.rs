use axum::Router;
use domain_delivery_zones::{DeliveryZoneService, PgDeliveryZoneRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgDeliveryZoneRepository::new(state.db.clone());
    let service = DeliveryZoneService::new(repository);
    handlers::router(service)
}
