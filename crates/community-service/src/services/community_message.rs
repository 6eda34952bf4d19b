//! Community message service - chat inside a community room

use community_core::{Community, CommunityMessage, Membership};
use tracing::instrument;
use validator::Validate;

use crate::dto::{
    DeleteCommunityMessageRequest, SendCommunityMessageRequest, UpdateCommunityMessageRequest,
};
use crate::rules::message::{
    holds_moderation_grant, is_active_member, is_community_owner, is_sender, CommunityMessageCtx,
};
use crate::rules::{Policy, RuleResult};

use super::context::ServiceContext;
use super::effects::Outcome;
use super::error::{ServiceError, ServiceResult};

/// Community message service
pub struct CommunityMessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommunityMessageService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a message to a community. Requires an active membership.
    #[instrument(skip(self, req))]
    pub async fn send(
        &self,
        actor_id: i64,
        req: &SendCommunityMessageRequest,
    ) -> ServiceResult<Outcome<CommunityMessage>> {
        req.validate()?;

        let community = self.find_community(req.community_id).await?;
        let ctx = self
            .rule_ctx(actor_id, actor_id, &community)
            .await?;
        if let RuleResult::Deny { reason, status } = is_active_member(&ctx) {
            return Err(ServiceError::from_deny(reason, status));
        }

        let message = self
            .ctx
            .community_messages()
            .create(community.id, actor_id, &req.content)
            .await?;

        Ok(Outcome::new("Message sent successfully", message))
    }

    /// Edit a community message. Only the original sender may edit.
    #[instrument(skip(self, req))]
    pub async fn update(
        &self,
        actor_id: i64,
        req: &UpdateCommunityMessageRequest,
    ) -> ServiceResult<Outcome<CommunityMessage>> {
        req.validate()?;

        let message = self.find_message(req.message_id).await?;
        let community = self.find_community(message.community_id).await?;

        let ctx = self
            .rule_ctx(actor_id, message.sender_id, &community)
            .await?;
        if is_sender(&ctx).is_allow() {
            let updated = self
                .ctx
                .community_messages()
                .update_content(message.id, &req.content)
                .await?;
            Ok(Outcome::new("Message updated successfully", updated))
        } else {
            Err(ServiceError::forbidden(
                "You are not allowed to update the message",
            ))
        }
    }

    /// Soft-delete a community message. Allowed for the sender, the
    /// community owner, or any admin grant holder.
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        actor_id: i64,
        req: &DeleteCommunityMessageRequest,
    ) -> ServiceResult<Outcome<CommunityMessage>> {
        req.validate()?;

        let message = self.find_message(req.message_id).await?;
        let community = self.find_community(message.community_id).await?;

        let ctx = self
            .rule_ctx(actor_id, message.sender_id, &community)
            .await?;
        let policy = Policy::new(&[is_sender, is_community_owner, holds_moderation_grant]);
        if policy.check_any(&ctx).is_allow() {
            let deleted = self
                .ctx
                .community_messages()
                .soft_delete(message.id)
                .await?;
            Ok(Outcome::new("Message deleted successfully", deleted))
        } else {
            Err(ServiceError::forbidden(
                "You are not allowed to delete the message",
            ))
        }
    }

    async fn find_community(&self, id: i64) -> ServiceResult<Community> {
        self.ctx
            .communities()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Community not found"))
    }

    async fn find_message(&self, id: i64) -> ServiceResult<CommunityMessage> {
        self.ctx
            .community_messages()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message not found"))
    }

    async fn rule_ctx(
        &self,
        actor_id: i64,
        sender_id: i64,
        community: &Community,
    ) -> ServiceResult<CommunityMessageCtx> {
        let membership = self.ctx.memberships().find(actor_id, community.id).await?;
        let grant = self.ctx.admins().find(community.id, actor_id).await?;

        Ok(CommunityMessageCtx {
            actor_id,
            sender_id,
            is_active_member: membership.as_ref().is_some_and(Membership::is_active),
            is_owner: community.is_owner(actor_id),
            has_moderation_grant: grant.is_some_and(|g| g.has_any()),
        })
    }
}
