//! PostgreSQL implementation of AuditLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use community_core::{AuditLogEntry, AuditLogRepository, NewAuditLogEntry, RepoResult};

use crate::models::{action_str, visibility_str, AuditLogModel};

use super::error::map_db_error;

/// PostgreSQL implementation of AuditLogRepository.
///
/// Append-only: no update or delete path exists.
#[derive(Clone)]
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    /// Create a new PgAuditLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    #[instrument(skip(self))]
    async fn append(&self, entry: NewAuditLogEntry) -> RepoResult<AuditLogEntry> {
        let model = sqlx::query_as::<_, AuditLogModel>(
            r#"
            INSERT INTO audit_logs (community_id, actor_id, target_id, action, visibility)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, community_id, actor_id, target_id, action, visibility, created_at
            "#,
        )
        .bind(entry.community_id)
        .bind(entry.actor_id)
        .bind(entry.target_id)
        .bind(action_str(entry.action))
        .bind(visibility_str(entry.visibility))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.try_into()
    }
}
