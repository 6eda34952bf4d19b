//! Community admin entity - scoped capability grant

use crate::value_objects::AdminPermissions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Admin grant, composite-keyed by (community, user).
///
/// Grants scoped capability within one community; distinct from ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityAdmin {
    pub community_id: i64,
    pub user_id: i64,
    pub permissions: AdminPermissions,
    pub granted_at: DateTime<Utc>,
}

impl CommunityAdmin {
    /// Check whether the grant carries a specific permission
    #[inline]
    pub fn has(&self, permission: AdminPermissions) -> bool {
        self.permissions.contains(permission)
    }

    /// Check whether the grant carries any permission at all
    #[inline]
    pub fn has_any(&self) -> bool {
        !self.permissions.is_empty()
    }
}
