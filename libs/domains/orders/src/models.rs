//! Order domain models and DTOs

use chrono::{DateTime, Utc};
use domain_catalog::Product;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Lifecycle state of a customer order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "order_status")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    /// Placed but not yet picked up
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Being prepared or delivered
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// A customer order with its checkout details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub name: String,
    pub lastname: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    pub postal_code: String,
    pub city: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_notice: Option<String>,
    pub status: OrderStatus,
    /// Order total in cents
    pub total: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating an order from checkout fields
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOrder {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub lastname: String,
    #[validate(length(min = 1, max = 30))]
    pub phone: String,
    #[validate(email)]
    pub email: String,
    pub company: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub address: String,
    pub apartment: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub postal_code: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(min = 1, max = 100))]
    pub country: String,
    pub order_notice: Option<String>,
    /// Defaults to pending when omitted
    pub status: Option<OrderStatus>,
    #[validate(range(min = 0))]
    pub total: i32,
}

/// DTO for updating an order
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateOrder {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub lastname: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub company: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub address: Option<String>,
    pub apartment: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub postal_code: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub country: Option<String>,
    pub order_notice: Option<String>,
    pub status: Option<OrderStatus>,
    #[validate(range(min = 0))]
    pub total: Option<i32>,
}

/// One product line of an order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    /// The referenced product, embedded on reads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    pub created_at: DateTime<Utc>,
}

/// Request body for adding a product line to an order
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AddOrderItem {
    pub product_id: Uuid,
    #[validate(range(min = 1))]
    pub quantity: i32,
}

/// Query parameters for listing orders
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct OrderQuery {
    /// Exact customer email
    pub email: Option<String>,
    /// Order status
    pub status: Option<OrderStatus>,
}

impl Order {
    /// Create a new order from a CreateOrder DTO
    pub fn new(input: CreateOrder) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            lastname: input.lastname,
            phone: input.phone,
            email: input.email,
            company: input.company,
            address: input.address,
            apartment: input.apartment,
            postal_code: input.postal_code,
            city: input.city,
            country: input.country,
            order_notice: input.order_notice,
            status: input.status.unwrap_or_default(),
            total: input.total,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the provided fields of a partial update
    pub fn apply_update(&mut self, update: UpdateOrder) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(lastname) = update.lastname {
            self.lastname = lastname;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(company) = update.company {
            self.company = Some(company);
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(apartment) = update.apartment {
            self.apartment = Some(apartment);
        }
        if let Some(postal_code) = update.postal_code {
            self.postal_code = postal_code;
        }
        if let Some(city) = update.city {
            self.city = city;
        }
        if let Some(country) = update.country {
            self.country = country;
        }
        if let Some(order_notice) = update.order_notice {
            self.order_notice = Some(order_notice);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(total) = update.total {
            self.total = total;
        }
        self.updated_at = Utc::now();
    }
}

impl OrderItem {
    /// Create a new order line from an AddOrderItem DTO
    pub fn new(order_id: Uuid, input: AddOrderItem) -> Self {
        Self {
            id: Uuid::now_v7(),
            order_id,
            product_id: input.product_id,
            quantity: input.quantity,
            product: None,
            created_at: Utc::now(),
        }
    }
}
