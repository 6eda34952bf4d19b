//! Membership database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use community_core::Membership;

/// Database model for the community_memberships table
#[derive(Debug, Clone, FromRow)]
pub struct MembershipModel {
    pub id: i64,
    pub user_id: i64,
    pub community_id: i64,
    pub joined_at: DateTime<Utc>,
    pub removed_at: Option<DateTime<Utc>>,
    pub removed_by: Option<i64>,
}

impl From<MembershipModel> for Membership {
    fn from(model: MembershipModel) -> Self {
        Membership {
            id: model.id,
            user_id: model.user_id,
            community_id: model.community_id,
            joined_at: model.joined_at,
            removed_at: model.removed_at,
            removed_by: model.removed_by,
        }
    }
}
