//! Delivery zone domain models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// A deliverable area defined by its postal codes
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeliveryZone {
    pub id: Uuid,
    pub name: String,
    /// Postal codes the zone covers, matched exactly
    pub postal_codes: Vec<String>,
    /// Minimum order total for delivery, in cents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_amount: Option<i32>,
    /// Delivery fee in cents
    pub delivery_fee: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a delivery zone
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateDeliveryZone {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// At least one postal code
    #[validate(length(min = 1))]
    pub postal_codes: Vec<String>,
    #[validate(range(min = 0))]
    pub min_order_amount: Option<i32>,
    /// Defaults to 0 when omitted
    #[validate(range(min = 0))]
    pub delivery_fee: Option<i32>,
    /// Defaults to true when omitted
    pub is_active: Option<bool>,
}

/// DTO for updating a delivery zone
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateDeliveryZone {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub postal_codes: Option<Vec<String>>,
    #[validate(range(min = 0))]
    pub min_order_amount: Option<i32>,
    #[validate(range(min = 0))]
    pub delivery_fee: Option<i32>,
    pub is_active: Option<bool>,
}

/// Query parameters for the serviceability check
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ServiceabilityQuery {
    /// Postal code to check (required)
    pub postal_code: Option<String>,
}

/// Outcome of a serviceability check
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Serviceability {
    pub serviceable: bool,
    /// The matching zone when the area is serviceable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<DeliveryZone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Serviceability {
    /// A serviceable area with its matching zone
    pub fn covered(zone: DeliveryZone) -> Self {
        Self {
            serviceable: true,
            zone: Some(zone),
            message: None,
        }
    }

    /// An area no active zone covers
    pub fn uncovered() -> Self {
        Self {
            serviceable: false,
            zone: None,
            message: Some("This area is not currently serviceable".to_string()),
        }
    }
}

impl DeliveryZone {
    /// Create a new delivery zone from a CreateDeliveryZone DTO
    pub fn new(input: CreateDeliveryZone) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            postal_codes: input.postal_codes,
            min_order_amount: input.min_order_amount,
            delivery_fee: input.delivery_fee.unwrap_or(0),
            is_active: input.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the provided fields of a partial update
    pub fn apply_update(&mut self, update: UpdateDeliveryZone) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(postal_codes) = update.postal_codes {
            self.postal_codes = postal_codes;
        }
        if let Some(min_order_amount) = update.min_order_amount {
            self.min_order_amount = Some(min_order_amount);
        }
        if let Some(delivery_fee) = update.delivery_fee {
            self.delivery_fee = delivery_fee;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
    }

    /// Whether the zone covers the postal code exactly
    pub fn covers(&self, postal_code: &str) -> bool {
        self.postal_codes.iter().any(|code| code == postal_code)
    }
}
