//! PostgreSQL implementation of JoinRequestRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use community_core::{DomainError, JoinRequest, JoinRequestRepository, RepoResult};

use crate::models::JoinRequestModel;

use super::error::{map_db_error, map_unique_violation, request_not_found};

/// PostgreSQL implementation of JoinRequestRepository.
///
/// A partial unique index on (user_id, community_id) WHERE status =
/// 'pending' backs the one-pending-request invariant.
#[derive(Clone)]
pub struct PgJoinRequestRepository {
    pool: PgPool,
}

impl PgJoinRequestRepository {
    /// Create a new PgJoinRequestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JoinRequestRepository for PgJoinRequestRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<JoinRequest>> {
        let result = sqlx::query_as::<_, JoinRequestModel>(
            r#"
            SELECT id, community_id, user_id, status, created_at
            FROM join_requests
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(JoinRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_pending(
        &self,
        user_id: i64,
        community_id: i64,
    ) -> RepoResult<Option<JoinRequest>> {
        let result = sqlx::query_as::<_, JoinRequestModel>(
            r#"
            SELECT id, community_id, user_id, status, created_at
            FROM join_requests
            WHERE user_id = $1 AND community_id = $2 AND status = 'pending'
            "#,
        )
        .bind(user_id)
        .bind(community_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(JoinRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn create_pending(&self, user_id: i64, community_id: i64) -> RepoResult<JoinRequest> {
        let model = sqlx::query_as::<_, JoinRequestModel>(
            r#"
            INSERT INTO join_requests (user_id, community_id, status)
            VALUES ($1, $2, 'pending')
            RETURNING id, community_id, user_id, status, created_at
            "#,
        )
        .bind(user_id)
        .bind(community_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicatePendingRequest))?;

        model.try_into()
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM join_requests WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(request_not_found(id));
        }

        Ok(())
    }
}
