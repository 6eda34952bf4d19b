//! Message entities - private (user-to-user) and community-scoped chat

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direct message between two users.
///
/// Edits are blocked once the receiver has read the message; deletion is a
/// soft tombstone (`deleted_at`), the content is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateMessage {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
    pub is_edited: bool,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl PrivateMessage {
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Message posted to a community chat room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityMessage {
    pub id: i64,
    pub community_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub is_edited: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CommunityMessage {
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
