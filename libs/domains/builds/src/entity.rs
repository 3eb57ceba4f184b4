//! Sea-ORM entity for the pc_builds table.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

use crate::models::PcUsage;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pc_builds")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub usage: PcUsage,
    pub product_id: Option<Uuid>,
    pub processor_id: Option<Uuid>,
    pub motherboard_id: Option<Uuid>,
    pub ram_id: Option<Uuid>,
    pub graphic_card_id: Option<Uuid>,
    pub primary_storage_id: Option<Uuid>,
    pub secondary_storage_id: Option<Uuid>,
    pub case_id: Option<Uuid>,
    pub cooler_id: Option<Uuid>,
    pub power_supply_id: Option<Uuid>,
    pub operating_system_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::PcBuild {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            usage: model.usage,
            product_id: model.product_id,
            processor_id: model.processor_id,
            motherboard_id: model.motherboard_id,
            ram_id: model.ram_id,
            graphic_card_id: model.graphic_card_id,
            primary_storage_id: model.primary_storage_id,
            secondary_storage_id: model.secondary_storage_id,
            case_id: model.case_id,
            cooler_id: model.cooler_id,
            power_supply_id: model.power_supply_id,
            operating_system_id: model.operating_system_id,
            processor: None,
            motherboard: None,
            ram: None,
            graphic_card: None,
            primary_storage: None,
            secondary_storage: None,
            case: None,
            cooler: None,
            power_supply: None,
            operating_system: None,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<crate::models::PcBuild> for ActiveModel {
    fn from(build: crate::models::PcBuild) -> Self {
        Self {
            id: Set(build.id),
            usage: Set(build.usage),
            product_id: Set(build.product_id),
            processor_id: Set(build.processor_id),
            motherboard_id: Set(build.motherboard_id),
            ram_id: Set(build.ram_id),
            graphic_card_id: Set(build.graphic_card_id),
            primary_storage_id: Set(build.primary_storage_id),
            secondary_storage_id: Set(build.secondary_storage_id),
            case_id: Set(build.case_id),
            cooler_id: Set(build.cooler_id),
            power_supply_id: Set(build.power_supply_id),
            operating_system_id: Set(build.operating_system_id),
            created_at: Set(build.created_at.into()),
            updated_at: Set(build.updated_at.into()),
        }
    }
}
