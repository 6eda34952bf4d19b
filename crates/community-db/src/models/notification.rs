//! Notification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use community_core::{DomainError, Notification, NotificationKind};

use super::bad_enum;

/// Database model for the notifications table
#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: i64,
    pub user_id: i64,
    pub message: String,
    pub kind: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<NotificationModel> for Notification {
    type Error = DomainError;

    fn try_from(model: NotificationModel) -> Result<Self, Self::Error> {
        let kind = match model.kind.as_str() {
            "join_community" => NotificationKind::JoinCommunity,
            "reject_community" => NotificationKind::RejectCommunity,
            "your_admin" => NotificationKind::YourAdmin,
            "update_admin" => NotificationKind::UpdateAdmin,
            "remove_admin" => NotificationKind::RemoveAdmin,
            other => return Err(bad_enum("notifications.kind", other)),
        };

        Ok(Notification {
            id: model.id,
            user_id: model.user_id,
            message: model.message,
            kind,
            is_read: model.is_read,
            created_at: model.created_at,
        })
    }
}

/// Column value for a notification kind
pub(crate) fn kind_str(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::JoinCommunity => "join_community",
        NotificationKind::RejectCommunity => "reject_community",
        NotificationKind::YourAdmin => "your_admin",
        NotificationKind::UpdateAdmin => "update_admin",
        NotificationKind::RemoveAdmin => "remove_admin",
    }
}
