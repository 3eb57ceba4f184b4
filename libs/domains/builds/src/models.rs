//! PC build domain models and DTOs

use chrono::{DateTime, Utc};
use domain_catalog::Product;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// What a PC configuration is put together for
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
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "pc_usage")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PcUsage {
    #[sea_orm(string_value = "gaming")]
    Gaming,
    #[sea_orm(string_value = "productivity")]
    Productivity,
    #[sea_orm(string_value = "content")]
    Content,
    #[sea_orm(string_value = "development")]
    Development,
    #[sea_orm(string_value = "streaming")]
    Streaming,
    #[sea_orm(string_value = "workstation")]
    Workstation,
    #[sea_orm(string_value = "budget")]
    Budget,
    #[sea_orm(string_value = "mini")]
    Mini,
    #[sea_orm(string_value = "student")]
    Student,
    #[sea_orm(string_value = "custom")]
    Custom,
}

/// A PC configuration assembled from catalog products.
///
/// Every component slot is optional. Slots carry the referenced product
/// id, and listings resolve each populated slot into the product itself;
/// empty slots are omitted from responses entirely.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PcBuild {
    pub id: Uuid,
    pub usage: PcUsage,
    /// The catalog product this build is sold as, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motherboard_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphic_card_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_storage_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_storage_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooler_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_supply_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motherboard: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphic_card: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_storage: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_storage: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooler: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_supply: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<Product>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a PC build
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePcBuild {
    /// One of: gaming, productivity, content, development, streaming,
    /// workstation, budget, mini, student, custom
    pub usage: String,
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
}

/// DTO for updating a PC build; absent component slots are kept
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePcBuild {
    pub usage: Option<String>,
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
}

/// Query parameters for listing PC builds
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
pub struct BuildQuery {
    /// Restrict to one usage profile
    pub usage: Option<String>,
    /// Page number starting at 1; pages hold 12 builds
    pub page: Option<u64>,
}

impl PcBuild {
    pub fn new(usage: PcUsage, input: CreatePcBuild) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            usage,
            product_id: input.product_id,
            processor_id: input.processor_id,
            motherboard_id: input.motherboard_id,
            ram_id: input.ram_id,
            graphic_card_id: input.graphic_card_id,
            primary_storage_id: input.primary_storage_id,
            secondary_storage_id: input.secondary_storage_id,
            case_id: input.case_id,
            cooler_id: input.cooler_id,
            power_supply_id: input.power_supply_id,
            operating_system_id: input.operating_system_id,
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
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, usage: Option<PcUsage>, input: UpdatePcBuild) {
        if let Some(usage) = usage {
            self.usage = usage;
        }
        if let Some(id) = input.processor_id {
            self.processor_id = Some(id);
        }
        if let Some(id) = input.motherboard_id {
            self.motherboard_id = Some(id);
        }
        if let Some(id) = input.ram_id {
            self.ram_id = Some(id);
        }
        if let Some(id) = input.graphic_card_id {
            self.graphic_card_id = Some(id);
        }
        if let Some(id) = input.primary_storage_id {
            self.primary_storage_id = Some(id);
        }
        if let Some(id) = input.secondary_storage_id {
            self.secondary_storage_id = Some(id);
        }
        if let Some(id) = input.case_id {
            self.case_id = Some(id);
        }
        if let Some(id) = input.cooler_id {
            self.cooler_id = Some(id);
        }
        if let Some(id) = input.power_supply_id {
            self.power_supply_id = Some(id);
        }
        if let Some(id) = input.operating_system_id {
            self.operating_system_id = Some(id);
        }
        self.updated_at = Utc::now();
    }

    /// Product ids of the populated component slots
    pub fn component_ids(&self) -> Vec<Uuid> {
        [
            self.processor_id,
            self.motherboard_id,
            self.ram_id,
            self.graphic_card_id,
            self.primary_storage_id,
            self.secondary_storage_id,
            self.case_id,
            self.cooler_id,
            self.power_supply_id,
            self.operating_system_id,
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
