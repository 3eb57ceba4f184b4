//! Sea-ORM entity for the delivery_zones table.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "delivery_zones")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// JSON array of postal codes
    pub postal_codes: Json,
    pub min_order_amount: Option<i32>,
    pub delivery_fee: i32,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::DeliveryZone {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            postal_codes: serde_json::from_value(model.postal_codes).unwrap_or_default(),
            min_order_amount: model.min_order_amount,
            delivery_fee: model.delivery_fee,
            is_active: model.is_active,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<crate::models::DeliveryZone> for ActiveModel {
    fn from(zone: crate::models::DeliveryZone) -> Self {
        Self {
            id: Set(zone.id),
            name: Set(zone.name),
            postal_codes: Set(zone.postal_codes.into()),
            min_order_amount: Set(zone.min_order_amount),
            delivery_fee: Set(zone.delivery_fee),
            is_active: Set(zone.is_active),
            created_at: Set(zone.created_at.into()),
            updated_at: Set(zone.updated_at.into()),
        }
    }
}
