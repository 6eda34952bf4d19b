//! Community admin database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use community_core::{AdminPermissions, CommunityAdmin};

/// Database model for the community_admins table.
///
/// Permissions are stored as a text[] of canonical names; unknown names in
/// a row are dropped on read rather than rejected.
#[derive(Debug, Clone, FromRow)]
pub struct CommunityAdminModel {
    pub community_id: i64,
    pub user_id: i64,
    pub permissions: Vec<String>,
    pub granted_at: DateTime<Utc>,
}

impl From<CommunityAdminModel> for CommunityAdmin {
    fn from(model: CommunityAdminModel) -> Self {
        CommunityAdmin {
            community_id: model.community_id,
            user_id: model.user_id,
            permissions: AdminPermissions::from_names(model.permissions),
            granted_at: model.granted_at,
        }
    }
}
