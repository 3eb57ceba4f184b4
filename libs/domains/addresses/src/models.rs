//! Address domain models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// A delivery address of one user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub id: Uuid,
    pub user_id: Uuid,
    pub street: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    /// Free-form label such as "home" or "work"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<String>,
    pub is_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating an address
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAddress {
    pub user_id: Uuid,
    #[validate(length(min = 1, max = 200))]
    pub street: String,
    pub apartment: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(min = 1, max = 100))]
    pub state: String,
    #[validate(length(min = 1, max = 20))]
    pub postal_code: String,
    pub address_type: Option<String>,
    /// Defaults to false when omitted
    pub is_default: Option<bool>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
}

/// DTO for updating an address
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAddress {
    #[validate(length(min = 1, max = 200))]
    pub street: Option<String>,
    pub apartment: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub state: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub postal_code: Option<String>,
    pub address_type: Option<String>,
    pub is_default: Option<bool>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
}

/// Query parameters for listing addresses
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AddressQuery {
    /// Owner of the addresses (required)
    pub user_id: Option<Uuid>,
}

impl Address {
    /// Create a new address from a CreateAddress DTO
    pub fn new(input: CreateAddress) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            user_id: input.user_id,
            street: input.street,
            apartment: input.apartment,
            city: input.city,
            state: input.state,
            postal_code: input.postal_code,
            address_type: input.address_type,
            is_default: input.is_default.unwrap_or(false),
            latitude: input.latitude,
            longitude: input.longitude,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the provided fields of a partial update
    pub fn apply_update(&mut self, update: UpdateAddress) {
        if let Some(street) = update.street {
            self.street = street;
        }
        if let Some(apartment) = update.apartment {
            self.apartment = Some(apartment);
        }
        if let Some(city) = update.city {
            self.city = city;
        }
        if let Some(state) = update.state {
            self.state = state;
        }
        if let Some(postal_code) = update.postal_code {
            self.postal_code = postal_code;
        }
        if let Some(address_type) = update.address_type {
            self.address_type = Some(address_type);
        }
        if let Some(is_default) = update.is_default {
            self.is_default = is_default;
        }
        if let Some(latitude) = update.latitude {
            self.latitude = Some(latitude);
        }
        if let Some(longitude) = update.longitude {
            self.longitude = Some(longitude);
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn new_address_defaults_to_non_default() {
        let address = Address::new(create_input());

        assert!(!address.is_default);
    }

    #[test]
    fn create_rejects_empty_street() {
        let input = CreateAddress {
            street: String::new(),
            ..create_input()
        };

        assert!(input.validate().is_err());
    }

    #[test]
    fn create_rejects_out_of_range_latitude() {
        let input = CreateAddress {
            latitude: Some(123.0),
            ..create_input()
        };

        assert!(input.validate().is_err());
    }

    #[test]
    fn apply_update_leaves_unset_fields_alone() {
        let mut address = Address::new(create_input());

        address.apply_update(UpdateAddress {
            city: Some("Shelbyville".to_string()),
            ..Default::default()
        });

        assert_eq!(address.city, "Shelbyville");
        assert_eq!(address.street, "12 Main St");
        assert_eq!(address.postal_code, "62704");
    }
}
