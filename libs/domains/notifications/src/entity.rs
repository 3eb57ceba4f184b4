//! Sea-ORM entity for the notifications table.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    pub kind: String,
    pub is_read: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Notification {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            message: model.message,
            kind: model.kind,
            is_read: model.is_read,
            created_at: model.created_at.into(),
        }
    }
}

impl From<crate::models::Notification> for ActiveModel {
    fn from(notification: crate::models::Notification) -> Self {
        Self {
            id: Set(notification.id),
            user_id: Set(notification.user_id),
            title: Set(notification.title),
            message: Set(notification.message),
            kind: Set(notification.kind),
            is_read: Set(notification.is_read),
            created_at: Set(notification.created_at.into()),
        }
    }
}
