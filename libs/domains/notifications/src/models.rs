//! Notification domain models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// An in-app notification addressed to one user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    /// Free-form category such as "order" or "promotion"
    pub kind: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a notification
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateNotification {
    pub user_id: Uuid,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
    #[validate(length(min = 1, max = 50))]
    pub kind: String,
}

/// DTO for flipping the read flag on one notification
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct MarkRead {
    /// Defaults to true when omitted
    pub is_read: Option<bool>,
}

/// DTO for marking every unread notification of one user read
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MarkAllRead {
    pub user_id: Uuid,
}

/// Count of notifications touched by a bulk update
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarkedRead {
    pub updated: u64,
}

/// Query parameters for listing notifications
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
pub struct NotificationQuery {
    /// Owner of the notifications (required)
    pub user_id: Option<Uuid>,
    /// Restrict to read or unread notifications
    pub is_read: Option<bool>,
}

impl Notification {
    pub fn new(input: CreateNotification) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            user_id: input.user_id,
            title: input.title,
            message: input.message,
            kind: input.kind,
            is_read: false,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification_starts_unread() {
        let notification = Notification::new(CreateNotification {
            user_id: Uuid::now_v7(),
            title: "Order shipped".to_string(),
            message: "Your order is on the way".to_string(),
            kind: "order".to_string(),
        });

        assert!(!notification.is_read);
        assert_eq!(notification.kind, "order");
    }

    #[test]
    fn test_create_notification_rejects_empty_title() {
        let input = CreateNotification {
            user_id: Uuid::now_v7(),
            title: String::new(),
            message: "body".to_string(),
            kind: "order".to_string(),
        };

        assert!(input.validate().is_err());
    }

    #[test]
    fn test_mark_read_defaults_to_none() {
        let body: MarkRead = serde_json::from_str("{}").unwrap();
        assert!(body.is_read.is_none());
    }
}
