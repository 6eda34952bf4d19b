//! Post entity (socket-facing subset)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post content type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    #[default]
    Text,
    Image,
    Video,
    Mixed,
}

/// Community post. Only the update/delete/broadcast subset is handled by
/// the real-time layer; creation flows through the REST surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub community_id: i64,
    pub kind: PostKind,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Check whether the given user authored this post
    #[inline]
    pub fn is_author(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}
