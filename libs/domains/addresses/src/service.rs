//! Business logic for addresses

use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AddressError, AddressResult};
use crate::models::{Address, CreateAddress, UpdateAddress};
use crate::repository::AddressRepository;

pub struct AddressService<R: AddressRepository> {
    repository: Arc<R>,
}

impl<R: AddressRepository> AddressService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn get_addresses(&self, user_id: Option<Uuid>) -> AddressResult<Vec<Address>> {
        let user_id =
            user_id.ok_or_else(|| AddressError::Validation("User ID is required".to_string()))?;

        self.repository.for_user(user_id).await
    }

    pub async fn create_address(&self, input: CreateAddress) -> AddressResult<Address> {
        input
            .validate()
            .map_err(|e| AddressError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn update_address(&self, id: Uuid, input: UpdateAddress) -> AddressResult<Address> {
        input
            .validate()
            .map_err(|e| AddressError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    pub async fn delete_address(&self, id: Uuid) -> AddressResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AddressError::AddressNotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockAddressRepository;

    fn create_input() -> CreateAddress {
        CreateAddress {
            user_id: Uuid::now_v7(),
            street: "12 Main St".to_string(),
            apartment: None,
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62704".to_string(),
            address_type: None,
            is_default: None,
            latitude: None,
            longitude: None,
        }
    }

    #[tokio::test]
    async fn get_addresses_requires_user_id() {
        let repository = MockAddressRepository::new();
        let service = AddressService::new(repository);

        let result = service.get_addresses(None).await;

        assert!(matches!(result, Err(AddressError::Validation(_))));
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_before_the_repository() {
        let repository = MockAddressRepository::new();
        let service = AddressService::new(repository);

        let result = service
            .create_address(CreateAddress {
                city: String::new(),
                ..create_input()
            })
            .await;

        assert!(matches!(result, Err(AddressError::Validation(_))));
    }

    #[tokio::test]
    async fn update_rejects_out_of_range_longitude() {
        let repository = MockAddressRepository::new();
        let service = AddressService::new(repository);

        let result = service
            .update_address(
                Uuid::now_v7(),
                UpdateAddress {
                    longitude: Some(200.0),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AddressError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_missing_address_is_not_found() {
        let mut repository = MockAddressRepository::new();
        repository.expect_delete().returning(|_| Ok(false));
        let service = AddressService::new(repository);

        let result = service.delete_address(Uuid::now_v7()).await;

        assert!(matches!(result, Err(AddressError::AddressNotFound(_))));
    }
}
