//! Notification entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notification category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    JoinCommunity,
    RejectCommunity,
    YourAdmin,
    UpdateAdmin,
    RemoveAdmin,
}

/// Notification created as a side effect of a domain action and delivered
/// to the recipient's personal room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub message: String,
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
