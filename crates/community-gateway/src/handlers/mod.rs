//! Event handlers
//!
//! One module per domain plus the room-management handlers. The dispatcher
//! routes each inbound frame by event name; every failure, from any layer,
//! funnels through the single translation point here and reaches only the
//! originating connection as an `error-message` frame.

mod admin;
mod community_message;
mod membership;
mod post;
mod private_message;
mod rooms;

use serde::de::DeserializeOwned;
use serde::Serialize;

use community_service::dto::SuccessEnvelope;
use community_service::{FieldError, ServiceError, ServiceResult};

use crate::connection::Connection;
use crate::protocol::events::{inbound, outbound};
use crate::protocol::{ClientEvent, ErrorPayload, OutboundMessage};
use crate::server::GatewayState;

/// Routes inbound events to their handlers
pub struct EventDispatcher;

impl EventDispatcher {
    /// Handle one inbound frame. Never returns an error: failures are
    /// translated and sent back on the originating connection.
    pub async fn dispatch(state: &GatewayState, connection: &Connection, event: ClientEvent) {
        tracing::trace!(
            connection_id = %connection.id(),
            event = %event.event,
            "Received event"
        );

        if let Err(err) = Self::route(state, connection, &event).await {
            if err.status_code() == 500 {
                tracing::error!(
                    connection_id = %connection.id(),
                    event = %event.event,
                    error = %err,
                    "Handler failed"
                );
            } else {
                tracing::debug!(
                    connection_id = %connection.id(),
                    event = %event.event,
                    error = %err,
                    "Event rejected"
                );
            }

            let payload = ErrorPayload::from(&err);
            let _ = connection
                .send(OutboundMessage::new(outbound::ERROR, &payload))
                .await;
        }
    }

    async fn route(
        state: &GatewayState,
        connection: &Connection,
        event: &ClientEvent,
    ) -> ServiceResult<()> {
        match event.event.as_str() {
            inbound::REGISTER => rooms::register(state, connection, &event.data),
            inbound::JOIN_COMMUNITY => rooms::join_community(state, connection, &event.data),
            inbound::JOIN_ADMIN_ROOM => rooms::join_admin_room(state, connection, &event.data),
            inbound::LEAVE_ADMIN_ROOM => rooms::leave_admin_room(state, connection, &event.data),

            inbound::ADD_MEMBER => membership::add_member(state, connection, &event.data).await,
            inbound::LEAVE_MEMBER => membership::leave_member(state, connection, &event.data).await,
            inbound::DELETE_MEMBER => {
                membership::delete_member(state, connection, &event.data).await
            }
            inbound::HANDLE_REQUEST => {
                membership::handle_request(state, connection, &event.data).await
            }

            inbound::ADD_ADMIN => admin::add_admin(state, connection, &event.data).await,
            inbound::UPDATE_ADMIN => admin::update_admin(state, connection, &event.data).await,
            inbound::DELETE_ADMIN => admin::delete_admin(state, connection, &event.data).await,

            inbound::SEND_MESSAGE => {
                private_message::send_message(state, connection, &event.data).await
            }
            inbound::UPDATE_MESSAGE => {
                private_message::update_message(state, connection, &event.data).await
            }
            inbound::DELETE_MESSAGE => {
                private_message::delete_message(state, connection, &event.data).await
            }

            inbound::SEND_COMMUNITY_MESSAGE => {
                community_message::send_message(state, connection, &event.data).await
            }
            inbound::UPDATE_COMMUNITY_MESSAGE => {
                community_message::update_message(state, connection, &event.data).await
            }
            inbound::DELETE_COMMUNITY_MESSAGE => {
                community_message::delete_message(state, connection, &event.data).await
            }

            inbound::NEW_POST => post::new_post(state, connection, &event.data).await,
            inbound::UPDATE_POST => post::update_post(state, connection, &event.data).await,
            inbound::DELETE_POST => post::delete_post(state, connection, &event.data).await,

            unknown => Err(ServiceError::invalid_state(format!(
                "Unknown event: {unknown}"
            ))),
        }
    }
}

/// Deserialize an event payload into its DTO
fn parse<T: DeserializeOwned>(data: &serde_json::Value) -> ServiceResult<T> {
    serde_json::from_value(data.clone()).map_err(|e| {
        ServiceError::Validation(vec![FieldError::new("data", format!("Invalid payload: {e}"))])
    })
}

/// Acknowledge a successful operation to the originating connection
async fn send_success<T: Serialize>(connection: &Connection, message: &str, data: &T) {
    let envelope = SuccessEnvelope::new(message, data);
    let _ = connection
        .send(OutboundMessage::new(outbound::SUCCESS, &envelope))
        .await;
}
