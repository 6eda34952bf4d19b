//! Room management handlers
//!
//! Room joins are transport-level subscriptions: no membership check runs
//! here. Authorization happens on the operations themselves, so a
//! non-member in a community room can observe broadcasts but cannot act.

use serde::Deserialize;
use serde_json::Value;

use community_service::{FieldError, ServiceError, ServiceResult};

use crate::connection::Connection;
use crate::protocol::events::outbound;
use crate::protocol::OutboundMessage;
use crate::rooms::{AdminArea, RoomId};
use crate::server::GatewayState;

use super::parse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterPayload {
    user_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommunityRoomPayload {
    community_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdminRoomPayload {
    community_id: i64,
    area: String,
}

/// `register`: subscribe to the personal notification room.
///
/// The claimed user id must match the authenticated actor; a connection
/// can never subscribe to another user's notifications.
pub fn register(state: &GatewayState, connection: &Connection, data: &Value) -> ServiceResult<()> {
    let payload: RegisterPayload = parse(data)?;

    if payload.user_id != connection.user_id() {
        return Err(ServiceError::forbidden(
            "User id does not match the authenticated user",
        ));
    }

    let room = RoomId::User(payload.user_id);
    state.connection_manager().join_room(connection, room);
    ack_joined(connection, room);

    Ok(())
}

/// `join-community`: subscribe to a community's broadcast room
pub fn join_community(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let payload: CommunityRoomPayload = parse(data)?;

    let room = RoomId::Community(payload.community_id);
    state.connection_manager().join_room(connection, room);
    ack_joined(connection, room);

    Ok(())
}

/// `join-admin-room`: subscribe to one admin console area
pub fn join_admin_room(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let payload: AdminRoomPayload = parse(data)?;
    let area = parse_area(&payload.area)?;

    let room = RoomId::CommunityAdmin(payload.community_id, area);
    state.connection_manager().join_room(connection, room);
    ack_joined(connection, room);

    Ok(())
}

/// `leave-admin-room`: drop an admin console subscription
pub fn leave_admin_room(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let payload: AdminRoomPayload = parse(data)?;
    let area = parse_area(&payload.area)?;

    state
        .connection_manager()
        .leave_room(connection, RoomId::CommunityAdmin(payload.community_id, area));

    Ok(())
}

fn parse_area(area: &str) -> ServiceResult<AdminArea> {
    AdminArea::parse(area).ok_or_else(|| {
        ServiceError::Validation(vec![FieldError::new(
            "area",
            "Area must be users, posts or settings",
        )])
    })
}

fn ack_joined(connection: &Connection, room: RoomId) {
    let payload = serde_json::json!({ "room": room.to_string() });
    // Fire-and-forget; a full channel just drops the ack
    let _ = connection.try_send(OutboundMessage::new(outbound::JOINED_ROOM, &payload));
}
