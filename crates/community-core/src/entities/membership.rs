//! Membership entity - a user's participation record in a community

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Community membership record.
///
/// Removal is a soft delete: `removed_at`/`removed_by` are set instead of
/// deleting the row. This preserves history and drives the rejoin logic:
/// a self-leave (`removed_by` is None) can be reactivated, while an
/// admin-initiated removal (`removed_by` set) always requires re-approval.
///
/// Invariant: at most one membership row per (user, community), active when
/// `removed_at` is None.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: i64,
    pub user_id: i64,
    pub community_id: i64,
    pub joined_at: DateTime<Utc>,
    pub removed_at: Option<DateTime<Utc>>,
    pub removed_by: Option<i64>,
}

impl Membership {
    /// Check whether the membership is currently active
    #[inline]
    pub fn is_active(&self) -> bool {
        self.removed_at.is_none()
    }

    /// Check whether the member was removed by an admin (as opposed to a
    /// voluntary leave)
    #[inline]
    pub fn removed_by_admin(&self) -> bool {
        self.removed_at.is_some() && self.removed_by.is_some()
    }

    /// Check whether the member left on their own
    #[inline]
    pub fn left_voluntarily(&self) -> bool {
        self.removed_at.is_some() && self.removed_by.is_none()
    }
}
