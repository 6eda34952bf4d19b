//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use community_core::{Notification, NotificationKind, NotificationRepository, RepoResult};

use crate::models::{kind_str, NotificationModel};

use super::error::map_db_error;

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new PgNotificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self, message))]
    async fn create(
        &self,
        user_id: i64,
        message: &str,
        kind: NotificationKind,
    ) -> RepoResult<Notification> {
        let model = sqlx::query_as::<_, NotificationModel>(
            r#"
            INSERT INTO notifications (user_id, message, kind)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, message, kind, is_read, created_at
            "#,
        )
        .bind(user_id)
        .bind(message)
        .bind(kind_str(kind))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.try_into()
    }
}
