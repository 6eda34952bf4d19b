//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use community_core::{DomainError, Post, PostKind};

use super::bad_enum;

/// Database model for the posts table (socket-facing columns only)
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub user_id: i64,
    pub community_id: i64,
    pub kind: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<PostModel> for Post {
    type Error = DomainError;

    fn try_from(model: PostModel) -> Result<Self, Self::Error> {
        let kind = match model.kind.as_str() {
            "text" => PostKind::Text,
            "image" => PostKind::Image,
            "video" => PostKind::Video,
            "mixed" => PostKind::Mixed,
            other => return Err(bad_enum("posts.kind", other)),
        };

        Ok(Post {
            id: model.id,
            user_id: model.user_id,
            community_id: model.community_id,
            kind,
            content: model.content,
            created_at: model.created_at,
        })
    }
}
