//! Sea-ORM entity for the wishlist_items table.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wishlist_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::WishlistItem {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            product_id: model.product_id,
            product: None,
            created_at: model.created_at.into(),
        }
    }
}

impl From<crate::models::WishlistItem> for ActiveModel {
    fn from(item: crate::models::WishlistItem) -> Self {
        Self {
            id: Set(item.id),
            user_id: Set(item.user_id),
            product_id: Set(item.product_id),
            created_at: Set(item.created_at.into()),
        }
    }
}
