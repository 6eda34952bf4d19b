//! Message database models - private and community-scoped

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use community_core::{CommunityMessage, PrivateMessage};

/// Database model for the private_messages table
#[derive(Debug, Clone, FromRow)]
pub struct PrivateMessageModel {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
    pub is_edited: bool,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<PrivateMessageModel> for PrivateMessage {
    fn from(model: PrivateMessageModel) -> Self {
        PrivateMessage {
            id: model.id,
            sender_id: model.sender_id,
            receiver_id: model.receiver_id,
            content: model.content,
            is_edited: model.is_edited,
            is_read: model.is_read,
            created_at: model.created_at,
            deleted_at: model.deleted_at,
        }
    }
}

/// Database model for the community_messages table
#[derive(Debug, Clone, FromRow)]
pub struct CommunityMessageModel {
    pub id: i64,
    pub community_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub is_edited: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<CommunityMessageModel> for CommunityMessage {
    fn from(model: CommunityMessageModel) -> Self {
        CommunityMessage {
            id: model.id,
            community_id: model.community_id,
            sender_id: model.sender_id,
            content: model.content,
            is_edited: model.is_edited,
            created_at: model.created_at,
            deleted_at: model.deleted_at,
        }
    }
}
