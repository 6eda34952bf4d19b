//! Community message event handlers
//!
//! Successful writes are acknowledged to the origin and broadcast to the
//! whole community room, origin included.

use serde_json::Value;

use community_service::dto::{
    DeleteCommunityMessageRequest, SendCommunityMessageRequest, UpdateCommunityMessageRequest,
};
use community_service::{CommunityMessageService, ServiceResult};

use crate::connection::Connection;
use crate::protocol::events::outbound;
use crate::protocol::OutboundMessage;
use crate::rooms::RoomId;
use crate::server::GatewayState;

use super::{parse, send_success};

/// `send-community-message`: post to a community room
pub async fn send_message(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let req: SendCommunityMessageRequest = parse(data)?;
    let service = CommunityMessageService::new(state.service_context());
    let outcome = service.send(connection.user_id(), &req).await?;

    send_success(connection, outcome.message, &outcome.data).await;
    state
        .connection_manager()
        .send_to_room(
            RoomId::Community(outcome.data.community_id),
            OutboundMessage::new(outbound::RECEIVE_COMMUNITY_MESSAGE, &outcome.data),
            None,
        )
        .await;

    Ok(())
}

/// `update-community-message`: edit a community message
pub async fn update_message(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let req: UpdateCommunityMessageRequest = parse(data)?;
    let service = CommunityMessageService::new(state.service_context());
    let outcome = service.update(connection.user_id(), &req).await?;

    send_success(connection, outcome.message, &outcome.data).await;
    state
        .connection_manager()
        .send_to_room(
            RoomId::Community(outcome.data.community_id),
            OutboundMessage::new(outbound::UPDATE_COMMUNITY_MESSAGE, &outcome.data),
            None,
        )
        .await;

    Ok(())
}

/// `delete-community-message`: soft-delete a community message
pub async fn delete_message(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let req: DeleteCommunityMessageRequest = parse(data)?;
    let service = CommunityMessageService::new(state.service_context());
    let outcome = service.delete(connection.user_id(), &req).await?;

    send_success(connection, outcome.message, &outcome.data).await;
    state
        .connection_manager()
        .send_to_room(
            RoomId::Community(outcome.data.community_id),
            OutboundMessage::new(outbound::DELETE_COMMUNITY_MESSAGE, &outcome.data),
            None,
        )
        .await;

    Ok(())
}
