//! Admin grant event handlers

use serde_json::Value;

use community_service::dto::AdminGrantRequest;
use community_service::{AdminService, ServiceResult};

use crate::connection::Connection;
use crate::effects::EffectRunner;
use crate::server::GatewayState;

use super::{parse, send_success};

/// `add-admin`: grant admin permissions
pub async fn add_admin(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let req: AdminGrantRequest = parse(data)?;
    let service = AdminService::new(state.service_context());
    let outcome = service.grant(connection.user_id(), &req).await?;

    send_success(connection, outcome.message, &outcome.data).await;
    EffectRunner::new(state.service_context(), state.connection_manager())
        .run(connection, outcome.effects)
        .await;

    Ok(())
}

/// `update-admin`: replace an admin's permission set
pub async fn update_admin(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let req: AdminGrantRequest = parse(data)?;
    let service = AdminService::new(state.service_context());
    let outcome = service.update(connection.user_id(), &req).await?;

    send_success(connection, outcome.message, &outcome.data).await;
    EffectRunner::new(state.service_context(), state.connection_manager())
        .run(connection, outcome.effects)
        .await;

    Ok(())
}

/// `delete-admin`: revoke an admin grant
pub async fn delete_admin(
    state: &GatewayState,
    connection: &Connection,
    data: &Value,
) -> ServiceResult<()> {
    let req: AdminGrantRequest = parse(data)?;
    let service = AdminService::new(state.service_context());
    let outcome = service.revoke(connection.user_id(), &req).await?;

    send_success(connection, outcome.message, &outcome.data).await;
    EffectRunner::new(state.service_context(), state.connection_manager())
        .run(connection, outcome.effects)
        .await;

    Ok(())
}
