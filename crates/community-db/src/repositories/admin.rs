//! PostgreSQL implementation of AdminRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use community_core::{AdminPermissions, AdminRepository, CommunityAdmin, DomainError, RepoResult};

use crate::models::CommunityAdminModel;

use super::error::{admin_grant_not_found, map_db_error, map_unique_violation};

fn permission_names(permissions: AdminPermissions) -> Vec<String> {
    permissions.names().into_iter().map(String::from).collect()
}

/// PostgreSQL implementation of AdminRepository
#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    /// Create a new PgAdminRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    #[instrument(skip(self))]
    async fn find(&self, community_id: i64, user_id: i64) -> RepoResult<Option<CommunityAdmin>> {
        let result = sqlx::query_as::<_, CommunityAdminModel>(
            r#"
            SELECT community_id, user_id, permissions, granted_at
            FROM community_admins
            WHERE community_id = $1 AND user_id = $2
            "#,
        )
        .bind(community_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(CommunityAdmin::from))
    }

    #[instrument(skip(self))]
    async fn create(
        &self,
        community_id: i64,
        user_id: i64,
        permissions: AdminPermissions,
    ) -> RepoResult<CommunityAdmin> {
        let model = sqlx::query_as::<_, CommunityAdminModel>(
            r#"
            INSERT INTO community_admins (community_id, user_id, permissions)
            VALUES ($1, $2, $3)
            RETURNING community_id, user_id, permissions, granted_at
            "#,
        )
        .bind(community_id)
        .bind(user_id)
        .bind(permission_names(permissions))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateAdminGrant))?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn update_permissions(
        &self,
        community_id: i64,
        user_id: i64,
        permissions: AdminPermissions,
    ) -> RepoResult<CommunityAdmin> {
        let model = sqlx::query_as::<_, CommunityAdminModel>(
            r#"
            UPDATE community_admins
            SET permissions = $3
            WHERE community_id = $1 AND user_id = $2
            RETURNING community_id, user_id, permissions, granted_at
            "#,
        )
        .bind(community_id)
        .bind(user_id)
        .bind(permission_names(permissions))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(admin_grant_not_found)?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, community_id: i64, user_id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM community_admins WHERE community_id = $1 AND user_id = $2
            "#,
        )
        .bind(community_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(admin_grant_not_found());
        }

        Ok(())
    }
}
