//! Membership service - joining, leaving, removal and join-request review

use community_core::{
    AdminPermissions, AuditAction, Community, JoinRequest, Membership, NewAuditLogEntry,
    NotificationKind,
};
use serde::Serialize;
use tracing::instrument;
use validator::Validate;

use crate::dto::{AddMemberRequest, DeleteMemberRequest, HandleRequestRequest, LeaveMemberRequest};
use crate::rules::moderation::{can_manage_users, is_owner, ModerationCtx};
use crate::rules::{Policy, RuleResult};

use super::context::ServiceContext;
use super::effects::{Effect, Outcome};
use super::error::{ServiceError, ServiceResult};
use super::notifications;

/// Result payload of a join attempt: either an immediate membership or a
/// pending request awaiting review.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum JoinData {
    Membership(Membership),
    Request(JoinRequest),
}

/// Review decision on a pending join request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestAction {
    Accepted,
    Rejected,
}

/// Membership service
pub struct MembershipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MembershipService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Join a community.
    ///
    /// The branch taken depends on the prior membership row, checked in
    /// order: an active row rejects the attempt, a voluntary leave gets
    /// welcomed back into a public community, and every other path into a
    /// gated community (private, or after an admin removal) produces a
    /// pending request.
    #[instrument(skip(self))]
    pub async fn join(
        &self,
        actor_id: i64,
        req: &AddMemberRequest,
    ) -> ServiceResult<Outcome<JoinData>> {
        req.validate()?;

        let community = self.find_community(req.community_id).await?;
        let existing = self
            .ctx
            .memberships()
            .find(actor_id, community.id)
            .await?;

        match existing {
            Some(m) if m.is_active() => Err(ServiceError::invalid_state(
                "You are already a member in this community",
            )),
            Some(m) if m.left_voluntarily() && !community.requires_approval() => {
                let membership = self.ctx.memberships().reactivate(m.id).await?;
                Ok(self.admitted_outcome(
                    "Welcome back to the community",
                    &community,
                    membership,
                ))
            }
            // Admin removals always re-enter through review; voluntary
            // leavers of a private community do too.
            Some(_) => self.pending_outcome(actor_id, community.id).await,
            None if community.requires_approval() => {
                self.pending_outcome(actor_id, community.id).await
            }
            None => {
                let membership = self
                    .ctx
                    .memberships()
                    .create(actor_id, community.id)
                    .await?;
                Ok(self.admitted_outcome("Added member successfully", &community, membership))
            }
        }
    }

    /// Leave a community voluntarily
    #[instrument(skip(self))]
    pub async fn leave(
        &self,
        actor_id: i64,
        req: &LeaveMemberRequest,
    ) -> ServiceResult<Outcome<Membership>> {
        req.validate()?;

        let community = self.find_community(req.community_id).await?;
        if community.is_owner(actor_id) {
            return Err(ServiceError::invalid_state(
                "Community owners cannot leave their community",
            ));
        }

        let membership = self
            .ctx
            .memberships()
            .find(actor_id, community.id)
            .await?
            .filter(Membership::is_active)
            .ok_or_else(|| ServiceError::not_found("Member not found"))?;

        let removed = self.ctx.memberships().remove(membership.id, None).await?;

        // The leaver's connection drops out of the room before the
        // broadcast, so the announcement excludes the origin.
        Ok(Outcome::new("Deleted member successfully", removed)
            .with_effect(Effect::audit_excluding_origin(NewAuditLogEntry::public(
                community.id,
                actor_id,
                actor_id,
                AuditAction::Leave,
            )))
            .with_effect(Effect::LeaveCommunityRoom {
                community_id: community.id,
            }))
    }

    /// Remove another member from a community. Requires ownership or the
    /// `manage_users` permission.
    #[instrument(skip(self))]
    pub async fn remove_member(
        &self,
        actor_id: i64,
        req: &DeleteMemberRequest,
    ) -> ServiceResult<Outcome<Membership>> {
        req.validate()?;

        let community = self.find_community(req.community_id).await?;
        let membership = self
            .ctx
            .memberships()
            .find(req.member_id, community.id)
            .await?
            .filter(Membership::is_active)
            .ok_or_else(|| ServiceError::not_found("Not found member in this community"))?;

        self.require_user_management(&community, actor_id, "You are not authorized to delete this user")
            .await?;

        if req.member_id == actor_id {
            return Err(ServiceError::invalid_state(
                "Admins cannot remove themselves",
            ));
        }
        if community.is_owner(req.member_id) {
            return Err(ServiceError::invalid_state(
                "Community owners cannot be removed",
            ));
        }

        let removed = self
            .ctx
            .memberships()
            .remove(membership.id, Some(actor_id))
            .await?;

        Ok(
            Outcome::new("Remove member successfully", removed).with_effect(Effect::audit(
                NewAuditLogEntry::public(community.id, actor_id, req.member_id, AuditAction::Remove),
            )),
        )
    }

    /// Accept or reject a pending join request. Requires ownership or the
    /// `manage_users` permission.
    ///
    /// The request row is deleted either way; acceptance additionally
    /// produces the membership (reusing a prior soft-deleted row when one
    /// exists).
    #[instrument(skip(self))]
    pub async fn resolve_request(
        &self,
        actor_id: i64,
        req: &HandleRequestRequest,
    ) -> ServiceResult<Outcome<JoinRequest>> {
        req.validate()?;
        let action = match req.action.as_str() {
            "accepted" => RequestAction::Accepted,
            "rejected" => RequestAction::Rejected,
            _ => {
                return Err(ServiceError::invalid_state(
                    "Action must be accepted or rejected",
                ))
            }
        };

        let community = self.find_community(req.community_id).await?;
        self.require_user_management(
            &community,
            actor_id,
            "You are not authorized to resolve join requests",
        )
        .await?;

        let request = self
            .ctx
            .join_requests()
            .find_by_id(req.request_id)
            .await?
            .filter(|r| r.community_id == community.id)
            .ok_or_else(|| ServiceError::not_found("Request not found"))?;

        let outcome = match action {
            RequestAction::Accepted => {
                let existing = self
                    .ctx
                    .memberships()
                    .find(request.user_id, community.id)
                    .await?;
                if existing.as_ref().is_some_and(Membership::is_active) {
                    return Err(ServiceError::invalid_state(
                        "User is already a member of the community",
                    ));
                }
                match existing {
                    Some(m) => self.ctx.memberships().reactivate(m.id).await?,
                    None => {
                        self.ctx
                            .memberships()
                            .create(request.user_id, community.id)
                            .await?
                    }
                };

                Outcome::new("Request accepted", request.clone())
                    .with_effect(Effect::audit(NewAuditLogEntry::public(
                        community.id,
                        actor_id,
                        request.user_id,
                        AuditAction::Accept,
                    )))
                    .with_effect(Effect::notify(
                        request.user_id,
                        notifications::joined_community(&community.name),
                        NotificationKind::JoinCommunity,
                    ))
            }
            RequestAction::Rejected => Outcome::new("Request rejected", request.clone())
                .with_effect(Effect::audit(NewAuditLogEntry::private(
                    community.id,
                    actor_id,
                    request.user_id,
                    AuditAction::Reject,
                )))
                .with_effect(Effect::notify(
                    request.user_id,
                    notifications::request_rejected(&community.name),
                    NotificationKind::RejectCommunity,
                )),
        };

        self.ctx.join_requests().delete(request.id).await?;
        Ok(outcome)
    }

    async fn find_community(&self, community_id: i64) -> ServiceResult<Community> {
        self.ctx
            .communities()
            .find_by_id(community_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Community not found"))
    }

    /// Owner or `manage_users` grant, with the operation-specific
    /// rejection message.
    async fn require_user_management(
        &self,
        community: &Community,
        actor_id: i64,
        denied: &str,
    ) -> ServiceResult<()> {
        let permissions = self.actor_permissions(community.id, actor_id).await?;
        let ctx = ModerationCtx::new(actor_id, community.created_by, permissions);
        match Policy::new(&[is_owner, can_manage_users]).check_any(&ctx) {
            RuleResult::Allow => Ok(()),
            RuleResult::Deny { .. } => Err(ServiceError::forbidden(denied)),
        }
    }

    async fn actor_permissions(
        &self,
        community_id: i64,
        actor_id: i64,
    ) -> ServiceResult<AdminPermissions> {
        let grant = self.ctx.admins().find(community_id, actor_id).await?;
        Ok(grant.map_or_else(AdminPermissions::empty, |g| g.permissions))
    }

    fn admitted_outcome(
        &self,
        message: &'static str,
        community: &Community,
        membership: Membership,
    ) -> Outcome<JoinData> {
        let user_id = membership.user_id;
        Outcome::new(message, JoinData::Membership(membership))
            .with_effect(Effect::audit(NewAuditLogEntry::public(
                community.id,
                user_id,
                user_id,
                AuditAction::Join,
            )))
            .with_effect(Effect::notify(
                user_id,
                notifications::joined_community(&community.name),
                NotificationKind::JoinCommunity,
            ))
    }

    async fn pending_outcome(
        &self,
        actor_id: i64,
        community_id: i64,
    ) -> ServiceResult<Outcome<JoinData>> {
        if self
            .ctx
            .join_requests()
            .find_pending(actor_id, community_id)
            .await?
            .is_some()
        {
            return Err(ServiceError::invalid_state(
                "You already have a pending join request",
            ));
        }

        let request = self
            .ctx
            .join_requests()
            .create_pending(actor_id, community_id)
            .await?;

        Ok(
            Outcome::new(
                "Your join request is pending approval",
                JoinData::Request(request.clone()),
            )
            .with_effect(Effect::JoinRequestAlert {
                community_id,
                request,
            }),
        )
    }
}
