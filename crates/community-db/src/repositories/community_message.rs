//! PostgreSQL implementation of CommunityMessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use community_core::{CommunityMessage, CommunityMessageRepository, RepoResult};

use crate::models::CommunityMessageModel;

use super::error::{map_db_error, message_not_found};

/// PostgreSQL implementation of CommunityMessageRepository
#[derive(Clone)]
pub struct PgCommunityMessageRepository {
    pool: PgPool,
}

impl PgCommunityMessageRepository {
    /// Create a new PgCommunityMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommunityMessageRepository for PgCommunityMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<CommunityMessage>> {
        let result = sqlx::query_as::<_, CommunityMessageModel>(
            r#"
            SELECT id, community_id, sender_id, content, is_edited, created_at, deleted_at
            FROM community_messages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(CommunityMessage::from))
    }

    #[instrument(skip(self, content))]
    async fn create(
        &self,
        community_id: i64,
        sender_id: i64,
        content: &str,
    ) -> RepoResult<CommunityMessage> {
        let model = sqlx::query_as::<_, CommunityMessageModel>(
            r#"
            INSERT INTO community_messages (community_id, sender_id, content)
            VALUES ($1, $2, $3)
            RETURNING id, community_id, sender_id, content, is_edited, created_at, deleted_at
            "#,
        )
        .bind(community_id)
        .bind(sender_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self, content))]
    async fn update_content(&self, id: i64, content: &str) -> RepoResult<CommunityMessage> {
        let model = sqlx::query_as::<_, CommunityMessageModel>(
            r#"
            UPDATE community_messages
            SET content = $2, is_edited = TRUE
            WHERE id = $1
            RETURNING id, community_id, sender_id, content, is_edited, created_at, deleted_at
            "#,
        )
        .bind(id)
        .bind(content)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| message_not_found(id))?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: i64) -> RepoResult<CommunityMessage> {
        let model = sqlx::query_as::<_, CommunityMessageModel>(
            r#"
            UPDATE community_messages
            SET deleted_at = NOW()
            WHERE id = $1
            RETURNING id, community_id, sender_id, content, is_edited, created_at, deleted_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| message_not_found(id))?;

        Ok(model.into())
    }
}
