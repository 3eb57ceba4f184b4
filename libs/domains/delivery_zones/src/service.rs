//! Business logic for delivery zones

use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{DeliveryZoneError, DeliveryZoneResult};
use crate::models::{CreateDeliveryZone, DeliveryZone, Serviceability, UpdateDeliveryZone};
use crate::repository::DeliveryZoneRepository;

pub struct DeliveryZoneService<R: DeliveryZoneRepository> {
    repository: Arc<R>,
}

impl<R: DeliveryZoneRepository> DeliveryZoneService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_zones(&self) -> DeliveryZoneResult<Vec<DeliveryZone>> {
        self.repository.list_active().await
    }

    /// Whether an active zone covers the postal code exactly
    pub async fn check_serviceability(
        &self,
        postal_code: Option<String>,
    ) -> DeliveryZoneResult<Serviceability> {
        let postal_code = postal_code
            .filter(|code| !code.is_empty())
            .ok_or_else(|| DeliveryZoneError::Validation("Postal code is required".to_string()))?;

        let zones = self.repository.list_active().await?;

        Ok(match zones.into_iter().find(|z| z.covers(&postal_code)) {
            Some(zone) => Serviceability::covered(zone),
            None => Serviceability::uncovered(),
        })
    }

    pub async fn create_zone(&self, input: CreateDeliveryZone) -> DeliveryZoneResult<DeliveryZone> {
        input
            .validate()
            .map_err(|e| DeliveryZoneError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn update_zone(
        &self,
        id: Uuid,
        input: UpdateDeliveryZone,
    ) -> DeliveryZoneResult<DeliveryZone> {
        input
            .validate()
            .map_err(|e| DeliveryZoneError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    pub async fn delete_zone(&self, id: Uuid) -> DeliveryZoneResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(DeliveryZoneError::ZoneNotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockDeliveryZoneRepository;

    fn zone(name: &str, codes: &[&str]) -> DeliveryZone {
        DeliveryZone::new(CreateDeliveryZone {
            name: name.to_string(),
            postal_codes: codes.iter().map(|c| c.to_string()).collect(),
            min_order_amount: None,
            delivery_fee: None,
            is_active: None,
        })
    }

    #[tokio::test]
    async fn check_requires_a_postal_code() {
        let repository = MockDeliveryZoneRepository::new();
        let service = DeliveryZoneService::new(repository);

        let result = service.check_serviceability(None).await;
        assert!(matches!(result, Err(DeliveryZoneError::Validation(_))));

        let result = service.check_serviceability(Some(String::new())).await;
        assert!(matches!(result, Err(DeliveryZoneError::Validation(_))));
    }

    #[tokio::test]
    async fn check_matches_postal_codes_exactly() {
        let mut repository = MockDeliveryZoneRepository::new();
        repository
            .expect_list_active()
            .returning(|| Ok(vec![zone("Downtown", &["62704", "62701"])]));
        let service = DeliveryZoneService::new(repository);

        let outcome = service
            .check_serviceability(Some("62704".to_string()))
            .await
            .unwrap();
        assert!(outcome.serviceable);
        assert_eq!(outcome.zone.unwrap().name, "Downtown");

        // A prefix of a covered code is not covered
        let outcome = service
            .check_serviceability(Some("627".to_string()))
            .await
            .unwrap();
        assert!(!outcome.serviceable);
        assert!(outcome.message.is_some());
    }

    #[tokio::test]
    async fn create_rejects_empty_postal_code_list() {
        let repository = MockDeliveryZoneRepository::new();
        let service = DeliveryZoneService::new(repository);

        let result = service
            .create_zone(CreateDeliveryZone {
                name: "Empty".to_string(),
                postal_codes: Vec::new(),
                min_order_amount: None,
                delivery_fee: None,
                is_active: None,
            })
            .await;

        assert!(matches!(result, Err(DeliveryZoneError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_missing_zone_is_not_found() {
        let mut repository = MockDeliveryZoneRepository::new();
        repository.expect_delete().returning(|_| Ok(false));
        let service = DeliveryZoneService::new(repository);

        let result = service.delete_zone(Uuid::now_v7()).await;

        assert!(matches!(result, Err(DeliveryZoneError::ZoneNotFound(_))));
    }
}
