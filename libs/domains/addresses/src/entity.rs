//! Sea-ORM entity for the addresses table.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub street: String,
    pub apartment: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub address_type: Option<String>,
    pub is_default: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Address {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            street: model.street,
            apartment: model.apartment,
            city: model.city,
            state: model.state,
            postal_code: model.postal_code,
            address_type: model.address_type,
            is_default: model.is_default,
            latitude: model.latitude,
            longitude: model.longitude,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<crate::models::Address> for ActiveModel {
    fn from(address: crate::models::Address) -> Self {
        Self {
            id: Set(address.id),
            user_id: Set(address.user_id),
            street: Set(address.street),
            apartment: Set(address.apartment),
            city: Set(address.city),
            state: Set(address.state),
            postal_code: Set(address.postal_code),
            address_type: Set(address.address_type),
            is_default: Set(address.is_default),
            latitude: Set(address.latitude),
            longitude: Set(address.longitude),
            created_at: Set(address.created_at.into()),
            updated_at: Set(address.updated_at.into()),
        }
    }
}
