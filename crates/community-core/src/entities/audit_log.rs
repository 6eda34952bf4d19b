//! Audit log entity - immutable record of moderation-relevant changes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Moderation action recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Join,
    Leave,
    Remove,
    Accept,
    Reject,
}

/// Audit entry visibility.
///
/// Public entries are broadcast to the community room; private entries
/// (e.g. a rejected join request) are never broadcast and only surface as
/// a notification to the affected user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditVisibility {
    Public,
    Private,
}

/// Append-only audit log entry. Never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: i64,
    pub community_id: i64,
    pub actor_id: i64,
    pub target_id: i64,
    pub action: AuditAction,
    pub visibility: AuditVisibility,
    pub created_at: DateTime<Utc>,
}

/// Payload for appending a new audit entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuditLogEntry {
    pub community_id: i64,
    pub actor_id: i64,
    pub target_id: i64,
    pub action: AuditAction,
    pub visibility: AuditVisibility,
}

impl NewAuditLogEntry {
    pub fn public(community_id: i64, actor_id: i64, target_id: i64, action: AuditAction) -> Self {
        Self {
            community_id,
            actor_id,
            target_id,
            action,
            visibility: AuditVisibility::Public,
        }
    }

    pub fn private(community_id: i64, actor_id: i64, target_id: i64, action: AuditAction) -> Self {
        Self {
            community_id,
            actor_id,
            target_id,
            action,
            visibility: AuditVisibility::Private,
        }
    }
}
