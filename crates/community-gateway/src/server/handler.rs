//! WebSocket handler
//!
//! Authenticates the handshake before the protocol upgrade and pumps
//! frames between the socket and the connection's outbound channel.

use axum::{
    extract::{ws::Message, ws::WebSocket, Query, State, WebSocketUpgrade},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::mpsc;

use community_core::Actor;
use community_service::ServiceError;

use crate::connection::Connection;
use crate::handlers::EventDispatcher;
use crate::protocol::events::outbound;
use crate::protocol::{ClientEvent, ErrorPayload, OutboundMessage};
use crate::server::GatewayState;

/// Channel buffer size for outgoing messages
const MESSAGE_BUFFER_SIZE: usize = 100;

/// Handshake query parameters
#[derive(Debug, Deserialize)]
pub struct ConnectParams {
    token: Option<String>,
}

/// WebSocket gateway handler.
///
/// The credential is verified before the upgrade: a missing or invalid
/// token is rejected with 401 and no WebSocket is established.
pub async fn gateway_handler(
    State(state): State<GatewayState>,
    Query(params): Query<ConnectParams>,
    ws: WebSocketUpgrade,
) -> Response {
    let token = params.token.unwrap_or_default();

    let actor = match state
        .jwt_service()
        .validate_token(&token)
        .and_then(|claims| claims.actor())
    {
        Ok(actor) => actor,
        Err(e) => {
            tracing::debug!(error = %e, "Handshake rejected");
            return (StatusCode::UNAUTHORIZED, "Authentication required").into_response();
        }
    };

    ws.on_upgrade(move |socket| handle_socket(state, socket, actor))
        .into_response()
}

/// Handle an upgraded WebSocket connection
async fn handle_socket(state: GatewayState, socket: WebSocket, actor: Actor) {
    let (tx, mut rx) = mpsc::channel::<OutboundMessage>(MESSAGE_BUFFER_SIZE);
    let connection = state.connection_manager().add_connection(actor, tx);
    let connection_id = connection.id();

    tracing::info!(
        connection_id = %connection_id,
        user_id = connection.user_id(),
        "WebSocket connection established"
    );

    let (mut ws_sink, mut ws_stream) = socket.split();

    let state_recv = state.clone();
    let connection_recv = connection.clone();

    // Receive frames from the client
    let recv_task = tokio::spawn(async move {
        while let Some(msg) = ws_stream.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    handle_text_frame(&state_recv, &connection_recv, &text).await;
                }
                Ok(Message::Binary(_)) => {
                    tracing::debug!(
                        connection_id = %connection_recv.id(),
                        "Binary frames not supported"
                    );
                }
                Ok(Message::Ping(_) | Message::Pong(_)) => {}
                Ok(Message::Close(_)) => {
                    tracing::info!(
                        connection_id = %connection_recv.id(),
                        "Client closed connection"
                    );
                    return;
                }
                Err(e) => {
                    tracing::warn!(
                        connection_id = %connection_recv.id(),
                        error = %e,
                        "WebSocket error"
                    );
                    return;
                }
            }
        }
    });

    // Deliver queued outbound messages
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if let Ok(json) = msg.to_json() {
                if ws_sink.send(Message::Text(json.into())).await.is_err() {
                    break;
                }
            }
        }
        let _ = ws_sink.close().await;
    });

    tokio::select! {
        _ = recv_task => {}
        _ = send_task => {}
    }

    tracing::info!(connection_id = %connection_id, "Cleaning up connection");
    state.connection_manager().remove_connection(connection_id);
}

/// Parse and dispatch one text frame. Malformed frames get an error reply
/// instead of closing the connection.
async fn handle_text_frame(state: &GatewayState, connection: &Arc<Connection>, text: &str) {
    match ClientEvent::from_json(text) {
        Ok(event) => EventDispatcher::dispatch(state, connection, event).await,
        Err(e) => {
            tracing::debug!(
                connection_id = %connection.id(),
                error = %e,
                "Failed to parse frame"
            );
            let err = ServiceError::invalid_state("Malformed event frame");
            let _ = connection
                .send(OutboundMessage::new(
                    outbound::ERROR,
                    &ErrorPayload::from(&err),
                ))
                .await;
        }
    }
}
