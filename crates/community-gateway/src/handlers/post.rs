//! Post event handlers
//!
//! `new-post` is a pass-through: the post row is created over REST and the
//! author's client announces it here for fan-out. Updates and deletions go
//! through the service and broadcast enveloped results to the community
//! room.

use serde::Deserialize;
use serde_json::Value;

use community_service::dto::{DeletePostRequest, SuccessEnvelope, UpdatePostRequest};
use community_service::{PostService, ServiceResult};

use crate::connection::Connection;
use crate::protocol::events::outbound;
use crate::protocol::OutboundMessage;
use crate::rooms::RoomId;
use crate::server::GatewayState;

use super::parse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewPostPayload {
    community_id: i64,
}

/// `new-post`: fan a freshly created post out to its community room
pub async fn new_post(
    state: &GatewayState,
    _connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let payload: NewPostPayload = parse(data)?;

    state
        .connection_manager()
        .send_to_room(
            RoomId::Community(payload.community_id),
            OutboundMessage::new(outbound::NEW_POST, data),
            None,
        )
        .await;

    Ok(())
}

/// `update-post`: edit a post and broadcast the result
pub async fn update_post(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let req: UpdatePostRequest = parse(data)?;
    let service = PostService::new(state.service_context());
    let outcome = service.update(connection.user_id(), &req).await?;

    let envelope = SuccessEnvelope::new(outcome.message, &outcome.data);
    state
        .connection_manager()
        .send_to_room(
            RoomId::Community(outcome.data.community_id),
            OutboundMessage::new(outbound::UPDATE_POST, &envelope),
            None,
        )
        .await;

    Ok(())
}

/// `delete-post`: delete a post and broadcast the removal
pub async fn delete_post(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let req: DeletePostRequest = parse(data)?;
    let service = PostService::new(state.service_context());
    let outcome = service.delete(connection.user_id(), &req).await?;

    let envelope = SuccessEnvelope::new(outcome.message, &outcome.data);
    state
        .connection_manager()
        .send_to_room(
            RoomId::Community(outcome.data.community_id),
            OutboundMessage::new(outbound::DELETE_POST, &envelope),
            None,
        )
        .await;

    Ok(())
}
