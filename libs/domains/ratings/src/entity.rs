//! Sea-ORM entity for the product_ratings table.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_ratings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub review: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Rating {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            user_id: model.user_id,
            rating: model.rating,
            review: model.review,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<crate::models::Rating> for ActiveModel {
    fn from(rating: crate::models::Rating) -> Self {
        Self {
            id: Set(rating.id),
            product_id: Set(rating.product_id),
            user_id: Set(rating.user_id),
            rating: Set(rating.rating),
            review: Set(rating.review),
            created_at: Set(rating.created_at.into()),
            updated_at: Set(rating.updated_at.into()),
        }
    }
}
