//! Private message service - direct user-to-user messaging

use community_core::PrivateMessage;
use tracing::instrument;
use validator::Validate;

use crate::dto::{DeleteMessageRequest, SendMessageRequest, UpdateMessageRequest};
use crate::rules::message::{can_delete, can_send, can_update, not_yet_read, PrivateMessageCtx};
use crate::rules::{Policy, RuleResult};

use super::context::ServiceContext;
use super::effects::Outcome;
use super::error::{ServiceError, ServiceResult};

/// Private message service
pub struct PrivateMessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PrivateMessageService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a direct message to another user
    #[instrument(skip(self, req))]
    pub async fn send(
        &self,
        actor_id: i64,
        req: &SendMessageRequest,
    ) -> ServiceResult<Outcome<PrivateMessage>> {
        req.validate()?;

        self.ctx
            .users()
            .find_by_id(req.receiver_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User not found to receiver this message"))?;

        let ctx = PrivateMessageCtx {
            actor_id,
            sender_id: actor_id,
            receiver_id: req.receiver_id,
            is_read: false,
        };
        if let RuleResult::Deny { reason, status } = can_send(&ctx) {
            return Err(ServiceError::from_deny(reason, status));
        }

        let message = self
            .ctx
            .private_messages()
            .create(actor_id, req.receiver_id, &req.content)
            .await?;

        Ok(Outcome::new("Message sent successfully", message))
    }

    /// Edit a sent message. Blocked once the receiver has read it.
    #[instrument(skip(self, req))]
    pub async fn update(
        &self,
        actor_id: i64,
        req: &UpdateMessageRequest,
    ) -> ServiceResult<Outcome<PrivateMessage>> {
        req.validate()?;

        let message = self.find_message(req.message_id).await?;
        let ctx = self.rule_ctx(actor_id, &message);
        if let RuleResult::Deny { reason, status } =
            Policy::new(&[can_update, not_yet_read]).check(&ctx)
        {
            return Err(ServiceError::from_deny(reason, status));
        }

        let updated = self
            .ctx
            .private_messages()
            .update_content(message.id, &req.content)
            .await?;

        Ok(Outcome::new("Message updated successfully", updated))
    }

    /// Soft-delete a sent message; the content is retained
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        actor_id: i64,
        req: &DeleteMessageRequest,
    ) -> ServiceResult<Outcome<PrivateMessage>> {
        req.validate()?;

        let message = self.find_message(req.message_id).await?;
        let ctx = self.rule_ctx(actor_id, &message);
        if let RuleResult::Deny { reason, status } = can_delete(&ctx) {
            return Err(ServiceError::from_deny(reason, status));
        }

        let deleted = self.ctx.private_messages().soft_delete(message.id).await?;

        Ok(Outcome::new("Message deleted successfully", deleted))
    }

    async fn find_message(&self, id: i64) -> ServiceResult<PrivateMessage> {
        self.ctx
            .private_messages()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message not found"))
    }

    fn rule_ctx(&self, actor_id: i64, message: &PrivateMessage) -> PrivateMessageCtx {
        PrivateMessageCtx {
            actor_id,
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
            is_read: message.is_read,
        }
    }
}
