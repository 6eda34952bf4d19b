//! Messaging rules - private and community-scoped

use super::RuleResult;

// ============================================================================
// Private messages
// ============================================================================

/// Context for private-message checks
#[derive(Debug, Clone, Copy)]
pub struct PrivateMessageCtx {
    pub actor_id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub is_read: bool,
}

/// Sender may not target themselves
pub fn can_send(ctx: &PrivateMessageCtx) -> RuleResult {
    if ctx.receiver_id == ctx.sender_id {
        RuleResult::invalid_state("Cannot send a message to yourself")
    } else {
        RuleResult::Allow
    }
}

/// Only the original sender may edit
pub fn can_update(ctx: &PrivateMessageCtx) -> RuleResult {
    if ctx.actor_id == ctx.sender_id {
        RuleResult::Allow
    } else {
        RuleResult::forbidden("You are not allowed to update this message")
    }
}

/// Only the original sender may delete
pub fn can_delete(ctx: &PrivateMessageCtx) -> RuleResult {
    if ctx.actor_id == ctx.sender_id {
        RuleResult::Allow
    } else {
        RuleResult::forbidden("You are not allowed to delete this message")
    }
}

/// Edits are blocked once the receiver has read the message. Applies to
/// every sender, including the original one.
pub fn not_yet_read(ctx: &PrivateMessageCtx) -> RuleResult {
    if ctx.is_read {
        RuleResult::forbidden("You cannot edit this message because it has already been read")
    } else {
        RuleResult::Allow
    }
}

// ============================================================================
// Community messages
// ============================================================================

/// Context for community-message checks.
///
/// The membership/ownership/grant flags are resolved by the service before
/// rule evaluation.
#[derive(Debug, Clone, Copy)]
pub struct CommunityMessageCtx {
    pub actor_id: i64,
    pub sender_id: i64,
    pub is_active_member: bool,
    pub is_owner: bool,
    pub has_moderation_grant: bool,
}

/// Sender must hold an active membership
pub fn is_active_member(ctx: &CommunityMessageCtx) -> RuleResult {
    if ctx.is_active_member {
        RuleResult::Allow
    } else {
        RuleResult::forbidden("You are not a member in this community")
    }
}

/// Actor is the original sender
pub fn is_sender(ctx: &CommunityMessageCtx) -> RuleResult {
    if ctx.actor_id == ctx.sender_id {
        RuleResult::Allow
    } else {
        RuleResult::forbidden("You are not the sender of this message")
    }
}

/// Actor owns the community
pub fn is_community_owner(ctx: &CommunityMessageCtx) -> RuleResult {
    if ctx.is_owner {
        RuleResult::Allow
    } else {
        RuleResult::forbidden("You are not the community owner")
    }
}

/// Actor holds any admin grant on the community
pub fn holds_moderation_grant(ctx: &CommunityMessageCtx) -> RuleResult {
    if ctx.has_moderation_grant {
        RuleResult::Allow
    } else {
        RuleResult::forbidden("You are not an admin in this community")
    }
}
