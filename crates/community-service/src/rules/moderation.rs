//! Moderation rules over community ownership and admin grants

use community_core::AdminPermissions;

use super::RuleResult;

/// Context for ownership/grant checks.
///
/// `permissions` is the acting user's grant on the community, or empty when
/// no grant exists. The service resolves the grant before rule evaluation.
#[derive(Debug, Clone, Copy)]
pub struct ModerationCtx {
    pub actor_id: i64,
    pub owner_id: i64,
    pub permissions: AdminPermissions,
}

impl ModerationCtx {
    pub fn new(actor_id: i64, owner_id: i64, permissions: AdminPermissions) -> Self {
        Self {
            actor_id,
            owner_id,
            permissions,
        }
    }
}

/// Actor owns the community
pub fn is_owner(ctx: &ModerationCtx) -> RuleResult {
    if ctx.actor_id == ctx.owner_id {
        RuleResult::Allow
    } else {
        RuleResult::forbidden("You are not the community owner")
    }
}

/// Actor holds a grant containing `manage_users`
pub fn can_manage_users(ctx: &ModerationCtx) -> RuleResult {
    if ctx.permissions.contains(AdminPermissions::MANAGE_USERS) {
        RuleResult::Allow
    } else {
        RuleResult::forbidden("You do not have the manage_users permission")
    }
}

/// Actor holds a grant containing `edit_settings`
pub fn can_edit_settings(ctx: &ModerationCtx) -> RuleResult {
    if ctx.permissions.contains(AdminPermissions::EDIT_SETTINGS) {
        RuleResult::Allow
    } else {
        RuleResult::forbidden("You do not have the edit_settings permission")
    }
}

/// Actor holds a grant containing `manage_posts`
pub fn can_manage_posts(ctx: &ModerationCtx) -> RuleResult {
    if ctx.permissions.contains(AdminPermissions::MANAGE_POSTS) {
        RuleResult::Allow
    } else {
        RuleResult::forbidden("You do not have the manage_posts permission")
    }
}

/// Actor holds any grant at all
pub fn has_any_grant(ctx: &ModerationCtx) -> RuleResult {
    if ctx.permissions.is_empty() {
        RuleResult::forbidden("You are not an admin in this community")
    } else {
        RuleResult::Allow
    }
}
