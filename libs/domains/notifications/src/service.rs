//! Business logic for notifications

use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{NotificationError, NotificationResult};
use crate::models::{CreateNotification, MarkAllRead, MarkRead, MarkedRead, Notification};
use crate::repository::NotificationRepository;

pub struct NotificationService<R: NotificationRepository> {
    repository: Arc<R>,
}

impl<R: NotificationRepository> NotificationService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn get_notifications(
        &self,
        user_id: Option<Uuid>,
        is_read: Option<bool>,
    ) -> NotificationResult<Vec<Notification>> {
        let user_id = user_id
            .ok_or_else(|| NotificationError::Validation("User ID is required".to_string()))?;

        self.repository.for_user(user_id, is_read).await
    }

    pub async fn create_notification(
        &self,
        input: CreateNotification,
    ) -> NotificationResult<Notification> {
        input
            .validate()
            .map_err(|e| NotificationError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn mark_read(&self, id: Uuid, input: MarkRead) -> NotificationResult<Notification> {
        // An empty body marks the notification read
        let is_read = input.is_read.unwrap_or(true);

        self.repository.set_read(id, is_read).await
    }

    pub async fn mark_all_read(&self, input: MarkAllRead) -> NotificationResult<MarkedRead> {
        let updated = self.repository.mark_all_read(input.user_id).await?;

        Ok(MarkedRead { updated })
    }
}
