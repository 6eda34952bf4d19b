//! PostgreSQL implementation of MembershipRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use community_core::{DomainError, Membership, MembershipRepository, RepoResult};

use crate::models::MembershipModel;

use super::error::{map_db_error, map_unique_violation, membership_not_found};

/// PostgreSQL implementation of MembershipRepository
#[derive(Clone)]
pub struct PgMembershipRepository {
    pool: PgPool,
}

impl PgMembershipRepository {
    /// Create a new PgMembershipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipRepository for PgMembershipRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: i64, community_id: i64) -> RepoResult<Option<Membership>> {
        let result = sqlx::query_as::<_, MembershipModel>(
            r#"
            SELECT id, user_id, community_id, joined_at, removed_at, removed_by
            FROM community_memberships
            WHERE user_id = $1 AND community_id = $2
            "#,
        )
        .bind(user_id)
        .bind(community_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Membership::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, user_id: i64, community_id: i64) -> RepoResult<Membership> {
        let model = sqlx::query_as::<_, MembershipModel>(
            r#"
            INSERT INTO community_memberships (user_id, community_id)
            VALUES ($1, $2)
            RETURNING id, user_id, community_id, joined_at, removed_at, removed_by
            "#,
        )
        .bind(user_id)
        .bind(community_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateMembership))?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn reactivate(&self, membership_id: i64) -> RepoResult<Membership> {
        let model = sqlx::query_as::<_, MembershipModel>(
            r#"
            UPDATE community_memberships
            SET removed_at = NULL, removed_by = NULL, joined_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, community_id, joined_at, removed_at, removed_by
            "#,
        )
        .bind(membership_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(membership_not_found)?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn remove(&self, membership_id: i64, removed_by: Option<i64>) -> RepoResult<Membership> {
        let model = sqlx::query_as::<_, MembershipModel>(
            r#"
            UPDATE community_memberships
            SET removed_at = NOW(), removed_by = $2
            WHERE id = $1
            RETURNING id, user_id, community_id, joined_at, removed_at, removed_by
            "#,
        )
        .bind(membership_id)
        .bind(removed_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(membership_not_found)?;

        Ok(model.into())
    }
}
