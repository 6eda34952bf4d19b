//! Admin service - granting, updating and revoking per-community admin
//! permissions

use community_core::{
    AdminPermissions, Community, CommunityAdmin, NotificationKind,
};
use tracing::instrument;
use validator::Validate;

use crate::dto::AdminGrantRequest;
use crate::rules::moderation::{can_manage_users, is_owner, ModerationCtx};
use crate::rules::{Policy, RuleResult};

use super::context::ServiceContext;
use super::effects::{Effect, Outcome};
use super::error::{ServiceError, ServiceResult};
use super::notifications;

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Grant admin permissions to a user. Requires ownership or the
    /// `manage_users` permission.
    ///
    /// Unknown permission names are dropped; an empty or missing set falls
    /// back to the default grant.
    #[instrument(skip(self))]
    pub async fn grant(
        &self,
        actor_id: i64,
        req: &AdminGrantRequest,
    ) -> ServiceResult<Outcome<CommunityAdmin>> {
        req.validate()?;

        let community = self.find_community(req.community_id).await?;
        if self
            .ctx
            .admins()
            .find(community.id, req.user_admin)
            .await?
            .is_some()
        {
            return Err(ServiceError::invalid_state("User is already an admin"));
        }

        self.require_user_management(&community, actor_id, "You are not authorized to add admins")
            .await?;

        let permissions = self.requested_permissions(req);
        let grant = self
            .ctx
            .admins()
            .create(community.id, req.user_admin, permissions)
            .await?;

        Ok(
            Outcome::new("Admin added successfully", grant).with_effect(Effect::notify(
                req.user_admin,
                notifications::promoted_to_admin(&community.name),
                NotificationKind::YourAdmin,
            )),
        )
    }

    /// Replace the permission set on an existing grant
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        actor_id: i64,
        req: &AdminGrantRequest,
    ) -> ServiceResult<Outcome<CommunityAdmin>> {
        req.validate()?;

        let community = self.find_community(req.community_id).await?;
        if self
            .ctx
            .admins()
            .find(community.id, req.user_admin)
            .await?
            .is_none()
        {
            return Err(ServiceError::invalid_state(
                "This user is not an admin in this community",
            ));
        }

        self.require_user_management(
            &community,
            actor_id,
            "You are not authorized to update admins",
        )
        .await?;

        let permissions = self.requested_permissions(req);
        let grant = self
            .ctx
            .admins()
            .update_permissions(community.id, req.user_admin, permissions)
            .await?;

        Ok(
            Outcome::new("Admin updated successfully", grant).with_effect(Effect::notify(
                req.user_admin,
                notifications::admin_permissions_updated(&community.name),
                NotificationKind::UpdateAdmin,
            )),
        )
    }

    /// Revoke an existing grant
    #[instrument(skip(self))]
    pub async fn revoke(
        &self,
        actor_id: i64,
        req: &AdminGrantRequest,
    ) -> ServiceResult<Outcome<CommunityAdmin>> {
        req.validate()?;

        let community = self.find_community(req.community_id).await?;
        self.require_user_management(
            &community,
            actor_id,
            "You are not authorized to delete admins",
        )
        .await?;

        let grant = self
            .ctx
            .admins()
            .find(community.id, req.user_admin)
            .await?
            .ok_or_else(|| {
                ServiceError::invalid_state("This user is not an admin in this community")
            })?;

        self.ctx.admins().delete(community.id, req.user_admin).await?;

        Ok(
            Outcome::new("Deleted admin successfully", grant).with_effect(Effect::notify(
                req.user_admin,
                notifications::demoted_from_admin(&community.name),
                NotificationKind::RemoveAdmin,
            )),
        )
    }

    fn requested_permissions(&self, req: &AdminGrantRequest) -> AdminPermissions {
        AdminPermissions::normalize(req.permissions.as_deref().unwrap_or_default())
    }

    async fn find_community(&self, community_id: i64) -> ServiceResult<Community> {
        self.ctx
            .communities()
            .find_by_id(community_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Community not found"))
    }

    async fn require_user_management(
        &self,
        community: &Community,
        actor_id: i64,
        denied: &str,
    ) -> ServiceResult<()> {
        let grant = self.ctx.admins().find(community.id, actor_id).await?;
        let permissions = grant.map_or_else(AdminPermissions::empty, |g| g.permissions);
        let ctx = ModerationCtx::new(actor_id, community.created_by, permissions);
        match Policy::new(&[is_owner, can_manage_users]).check_any(&ctx) {
            RuleResult::Allow => Ok(()),
            RuleResult::Deny { .. } => Err(ServiceError::forbidden(denied)),
        }
    }
}
