//! Repository trait for notification data access

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::NotificationResult;
use crate::models::{CreateNotification, Notification};

/// Repository abstraction for notification persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// A user's notifications newest first, optionally filtered by read state
    async fn for_user(
        &self,
        user_id: Uuid,
        is_read: Option<bool>,
    ) -> NotificationResult<Vec<Notification>>;

    /// Store a new notification
    async fn create(&self, input: CreateNotification) -> NotificationResult<Notification>;

    /// Set the read flag on one notification
    async fn set_read(&self, id: Uuid, is_read: bool) -> NotificationResult<Notification>;

    /// Mark every unread notification of one user read, returning the count
    async fn mark_all_read(&self, user_id: Uuid) -> NotificationResult<u64>;
}
