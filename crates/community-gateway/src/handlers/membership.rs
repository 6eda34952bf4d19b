//! Membership event handlers

use serde_json::Value;

use community_service::dto::{
    AddMemberRequest, DeleteMemberRequest, HandleRequestRequest, LeaveMemberRequest,
};
use community_service::{MembershipService, ServiceResult};

use crate::connection::Connection;
use crate::effects::EffectRunner;
use crate::server::GatewayState;

use super::{parse, send_success};

/// `add-member`: join a community (or file a join request)
pub async fn add_member(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let req: AddMemberRequest = parse(data)?;
    let service = MembershipService::new(state.service_context());
    let outcome = service.join(connection.user_id(), &req).await?;

    send_success(connection, outcome.message, &outcome.data).await;
    EffectRunner::new(state.service_context(), state.connection_manager())
        .run(connection, outcome.effects)
        .await;

    Ok(())
}

/// `leave-member`: leave a community voluntarily
pub async fn leave_member(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let req: LeaveMemberRequest = parse(data)?;
    let service = MembershipService::new(state.service_context());
    let outcome = service.leave(connection.user_id(), &req).await?;

    send_success(connection, outcome.message, &outcome.data).await;
    EffectRunner::new(state.service_context(), state.connection_manager())
        .run(connection, outcome.effects)
        .await;

    Ok(())
}

/// `delete-member`: remove another member
pub async fn delete_member(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let req: DeleteMemberRequest = parse(data)?;
    let service = MembershipService::new(state.service_context());
    let outcome = service.remove_member(connection.user_id(), &req).await?;

    send_success(connection, outcome.message, &outcome.data).await;
    EffectRunner::new(state.service_context(), state.connection_manager())
        .run(connection, outcome.effects)
        .await;

    Ok(())
}

/// `handle-request`: accept or reject a pending join request
pub async fn handle_request(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let req: HandleRequestRequest = parse(data)?;
    let service = MembershipService::new(state.service_context());
    let outcome = service.resolve_request(connection.user_id(), &req).await?;

    send_success(connection, outcome.message, &outcome.data).await;
    EffectRunner::new(state.service_context(), state.connection_manager())
        .run(connection, outcome.effects)
        .await;

    Ok(())
}
