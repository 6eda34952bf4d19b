//! Join request database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use community_core::{DomainError, JoinRequest, JoinRequestStatus};

use super::bad_enum;

/// Database model for the join_requests table
#[derive(Debug, Clone, FromRow)]
pub struct JoinRequestModel {
    pub id: i64,
    pub community_id: i64,
    pub user_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<JoinRequestModel> for JoinRequest {
    type Error = DomainError;

    fn try_from(model: JoinRequestModel) -> Result<Self, Self::Error> {
        let status = match model.status.as_str() {
            "pending" => JoinRequestStatus::Pending,
            "accepted" => JoinRequestStatus::Accepted,
            "rejected" => JoinRequestStatus::Rejected,
            other => return Err(bad_enum("join_requests.status", other)),
        };

        Ok(JoinRequest {
            id: model.id,
            community_id: model.community_id,
            user_id: model.user_id,
            status,
            created_at: model.created_at,
        })
    }
}
