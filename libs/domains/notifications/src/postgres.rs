//! Postgres repository implementation for notifications

use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{
    entity,
    error::{NotificationError, NotificationResult},
    models::{CreateNotification, Notification},
    repository::NotificationRepository,
};

pub struct PgNotificationRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgNotificationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    async fn for_user(
        &self,
        user_id: Uuid,
        is_read: Option<bool>,
    ) -> NotificationResult<Vec<Notification>> {
        let mut query = entity::Entity::find()
            .filter(entity::Column::UserId.eq(user_id))
            .order_by_desc(entity::Column::CreatedAt);

        if let Some(read) = is_read {
            query = query.filter(entity::Column::IsRead.eq(read));
        }

        let models = query
            .all(self.base.db())
            .await
            .map_err(|e| NotificationError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, input: CreateNotification) -> NotificationResult<Notification> {
        let notification = Notification::new(input);
        let active_model: entity::ActiveModel = notification.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| NotificationError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(notification_id = %model.id, "Created notification");
        Ok(model.into())
    }

    async fn set_read(&self, id: Uuid, is_read: bool) -> NotificationResult<Notification> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| NotificationError::Internal(format!("Database error: {}", e)))?
            .ok_or(NotificationError::NotificationNotFound(id))?;

        let mut notification: Notification = model.into();
        notification.is_read = is_read;

        let updated = self
            .base
            .update(entity::ActiveModel::from(notification))
            .await
            .map_err(|e| NotificationError::Internal(format!("Database error: {}", e)))?;

        Ok(updated.into())
    }

    async fn mark_all_read(&self, user_id: Uuid) -> NotificationResult<u64> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::IsRead, Expr::value(true))
            .filter(entity::Column::UserId.eq(user_id))
            .filter(entity::Column::IsRead.eq(false))
            .exec(self.base.db())
            .await
            .map_err(|e| NotificationError::Internal(format!("Database error: {}", e)))?;

        if result.rows_affected > 0 {
            tracing::info!(
                user_id = %user_id,
                count = result.rows_affected,
                "Marked notifications read"
            );
        }

        Ok(result.rows_affected)
    }
}
