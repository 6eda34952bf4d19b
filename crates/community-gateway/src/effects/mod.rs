//! Effect runner
//!
//! Executes the secondary effects a service operation returns, after the
//! primary write succeeded. Effects run at-least-once and best-effort: a
//! failed effect is logged and the remaining effects still run, so the
//! operation's success response is never withdrawn.
//!
//! Broadcast routing:
//! - notifications go to the recipient's `user:<id>` room
//! - public audit entries go to the `community:<id>` room
//! - private audit entries are stored but never broadcast
//! - join request alerts go to `community-admin:<id>:users` only

use community_core::AuditVisibility;
use community_service::{Effect, ServiceContext};

use crate::connection::{Connection, ConnectionManager};
use crate::protocol::events::outbound;
use crate::protocol::OutboundMessage;
use crate::rooms::{AdminArea, RoomId};

/// Executes service effects against the connection manager
pub struct EffectRunner<'a> {
    ctx: &'a ServiceContext,
    manager: &'a ConnectionManager,
}

impl<'a> EffectRunner<'a> {
    pub fn new(ctx: &'a ServiceContext, manager: &'a ConnectionManager) -> Self {
        Self { ctx, manager }
    }

    /// Run all effects in order. `origin` is the connection whose event
    /// produced them.
    pub async fn run(&self, origin: &Connection, effects: Vec<Effect>) {
        for effect in effects {
            self.run_one(origin, effect).await;
        }
    }

    async fn run_one(&self, origin: &Connection, effect: Effect) {
        match effect {
            Effect::Notify {
                user_id,
                message,
                kind,
            } => {
                match self.ctx.notifications().create(user_id, &message, kind).await {
                    Ok(notification) => {
                        // Delivery is register-gated: only connections that
                        // joined their personal room receive the push
                        self.manager
                            .send_to_room(
                                RoomId::User(user_id),
                                OutboundMessage::new(outbound::NOTIFICATION_NEW, &notification),
                                None,
                            )
                            .await;
                    }
                    Err(e) => {
                        tracing::warn!(user_id, error = %e, "Failed to create notification");
                    }
                }
            }
            Effect::Audit {
                entry,
                exclude_origin,
            } => {
                let community_id = entry.community_id;
                match self.ctx.audit_logs().append(entry).await {
                    Ok(entry) if entry.visibility == AuditVisibility::Public => {
                        let exclude = exclude_origin.then(|| origin.id());
                        self.manager
                            .send_to_room(
                                RoomId::Community(community_id),
                                OutboundMessage::new(outbound::AUDIT_LOG_NEW, &entry),
                                exclude,
                            )
                            .await;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!(community_id, error = %e, "Failed to append audit entry");
                    }
                }
            }
            Effect::JoinRequestAlert {
                community_id,
                request,
            } => {
                self.manager
                    .send_to_room(
                        RoomId::CommunityAdmin(community_id, AdminArea::Users),
                        OutboundMessage::new(outbound::JOIN_REQUEST_NEW, &request),
                        None,
                    )
                    .await;
            }
            Effect::LeaveCommunityRoom { community_id } => {
                self.manager
                    .leave_room(origin, RoomId::Community(community_id));
            }
        }
    }
}
