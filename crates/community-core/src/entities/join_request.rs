//! Join request entity - approval gate for private communities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Join request lifecycle state
///
/// Terminal states (accepted/rejected) delete the row after producing the
/// membership and/or notification side effect; only `pending` rows persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinRequestStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A pending approval record gating entry to a private community, or
/// re-entry after an admin-initiated removal.
///
/// Invariant: at most one `pending` request per (user, community).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub id: i64,
    pub community_id: i64,
    pub user_id: i64,
    pub status: JoinRequestStatus,
    pub created_at: DateTime<Utc>,
}

impl JoinRequest {
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == JoinRequestStatus::Pending
    }
}
