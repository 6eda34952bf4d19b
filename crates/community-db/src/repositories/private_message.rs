//! PostgreSQL implementation of PrivateMessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use community_core::{PrivateMessage, PrivateMessageRepository, RepoResult};

use crate::models::PrivateMessageModel;

use super::error::{map_db_error, message_not_found};

/// PostgreSQL implementation of PrivateMessageRepository.
///
/// Deletion is a tombstone (`deleted_at`); content is never erased.
#[derive(Clone)]
pub struct PgPrivateMessageRepository {
    pool: PgPool,
}

impl PgPrivateMessageRepository {
    /// Create a new PgPrivateMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PrivateMessageRepository for PgPrivateMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<PrivateMessage>> {
        let result = sqlx::query_as::<_, PrivateMessageModel>(
            r#"
            SELECT id, sender_id, receiver_id, content, is_edited, is_read, created_at, deleted_at
            FROM private_messages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(PrivateMessage::from))
    }

    #[instrument(skip(self, content))]
    async fn create(
        &self,
        sender_id: i64,
        receiver_id: i64,
        content: &str,
    ) -> RepoResult<PrivateMessage> {
        let model = sqlx::query_as::<_, PrivateMessageModel>(
            r#"
            INSERT INTO private_messages (sender_id, receiver_id, content)
            VALUES ($1, $2, $3)
            RETURNING id, sender_id, receiver_id, content, is_edited, is_read, created_at, deleted_at
            "#,
        )
        .bind(sender_id)
        .bind(receiver_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self, content))]
    async fn update_content(&self, id: i64, content: &str) -> RepoResult<PrivateMessage> {
        let model = sqlx::query_as::<_, PrivateMessageModel>(
            r#"
            UPDATE private_messages
            SET content = $2, is_edited = TRUE
            WHERE id = $1
            RETURNING id, sender_id, receiver_id, content, is_edited, is_read, created_at, deleted_at
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
    async fn soft_delete(&self, id: i64) -> RepoResult<PrivateMessage> {
        let model = sqlx::query_as::<_, PrivateMessageModel>(
            r#"
            UPDATE private_messages
            SET deleted_at = NOW()
            WHERE id = $1
            RETURNING id, sender_id, receiver_id, content, is_edited, is_read, created_at, deleted_at
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
