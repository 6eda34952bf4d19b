//! Audit log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use community_core::{AuditAction, AuditLogEntry, AuditVisibility, DomainError};

use super::bad_enum;

/// Database model for the audit_logs table
#[derive(Debug, Clone, FromRow)]
pub struct AuditLogModel {
    pub id: i64,
    pub community_id: i64,
    pub actor_id: i64,
    pub target_id: i64,
    pub action: String,
    pub visibility: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<AuditLogModel> for AuditLogEntry {
    type Error = DomainError;

    fn try_from(model: AuditLogModel) -> Result<Self, Self::Error> {
        let action = match model.action.as_str() {
            "join" => AuditAction::Join,
            "leave" => AuditAction::Leave,
            "remove" => AuditAction::Remove,
            "accept" => AuditAction::Accept,
            "reject" => AuditAction::Reject,
            other => return Err(bad_enum("audit_logs.action", other)),
        };
        let visibility = match model.visibility.as_str() {
            "public" => AuditVisibility::Public,
            "private" => AuditVisibility::Private,
            other => return Err(bad_enum("audit_logs.visibility", other)),
        };

        Ok(AuditLogEntry {
            id: model.id,
            community_id: model.community_id,
            actor_id: model.actor_id,
            target_id: model.target_id,
            action,
            visibility,
            created_at: model.created_at,
        })
    }
}

/// Column value for an audit action
pub(crate) fn action_str(action: AuditAction) -> &'static str {
    match action {
        AuditAction::Join => "join",
        AuditAction::Leave => "leave",
        AuditAction::Remove => "remove",
        AuditAction::Accept => "accept",
        AuditAction::Reject => "reject",
    }
}

/// Column value for an audit visibility
pub(crate) fn visibility_str(visibility: AuditVisibility) -> &'static str {
    match visibility {
        AuditVisibility::Public => "public",
        AuditVisibility::Private => "private",
    }
}
