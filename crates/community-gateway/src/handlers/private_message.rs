//! Private message event handlers
//!
//! Outbound frames go to the originating connection only. The receiver is
//! expected to fetch conversation state through the REST surface; pushing
//! new private messages to the receiver's room is a known follow-up.

use serde_json::Value;

use community_service::dto::{DeleteMessageRequest, SendMessageRequest, UpdateMessageRequest};
use community_service::{PrivateMessageService, ServiceResult};

use crate::connection::Connection;
use crate::protocol::events::outbound;
use crate::protocol::OutboundMessage;
use crate::server::GatewayState;

use super::{parse, send_success};

/// `send-message`: send a direct message
pub async fn send_message(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let req: SendMessageRequest = parse(data)?;
    let service = PrivateMessageService::new(state.service_context());
    let outcome = service.send(connection.user_id(), &req).await?;

    send_success(connection, outcome.message, &outcome.data).await;
    let _ = connection
        .send(OutboundMessage::new(outbound::SEND_MESSAGE, &outcome.data))
        .await;

    Ok(())
}

/// `update-message`: edit a direct message
pub async fn update_message(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let req: UpdateMessageRequest = parse(data)?;
    let service = PrivateMessageService::new(state.service_context());
    let outcome = service.update(connection.user_id(), &req).await?;

    send_success(connection, outcome.message, &outcome.data).await;
    let _ = connection
        .send(OutboundMessage::new(outbound::UPDATE_MESSAGE, &outcome.data))
        .await;

    Ok(())
}

/// `delete-message`: soft-delete a direct message
pub async fn delete_message(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let req: DeleteMessageRequest = parse(data)?;
    let service = PrivateMessageService::new(state.service_context());
    let outcome = service.delete(connection.user_id(), &req).await?;

    send_success(connection, outcome.message, &outcome.data).await;
    let _ = connection
        .send(OutboundMessage::new(outbound::DELETE_MESSAGE, &outcome.data))
        .await;

    Ok(())
}
