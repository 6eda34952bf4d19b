//! Connection manager
//!
//! Tracks all live connections and their room memberships using `DashMap`
//! for concurrent access. Room membership is mirrored on the connection
//! itself so disconnect cleanup does not scan every room.

use std::collections::HashSet;
use std::sync::Arc;

use community_core::Actor;
use dashmap::DashMap;
use tokio::sync::mpsc;

use super::{Connection, ConnectionId};
use crate::protocol::OutboundMessage;
use crate::rooms::RoomId;

/// Manages all active WebSocket connections
pub struct ConnectionManager {
    /// Active connections by connection ID
    connections: DashMap<ConnectionId, Arc<Connection>>,

    /// User ID to connection IDs mapping (a user may hold several tabs)
    user_connections: DashMap<i64, HashSet<ConnectionId>>,

    /// Room to connection IDs mapping
    rooms: DashMap<RoomId, HashSet<ConnectionId>>,
}

impl ConnectionManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
            user_connections: DashMap::new(),
            rooms: DashMap::new(),
        }
    }

    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Register a new authenticated connection
    pub fn add_connection(
        &self,
        actor: Actor,
        sender: mpsc::Sender<OutboundMessage>,
    ) -> Arc<Connection> {
        let connection = Connection::new(actor, sender);
        let id = connection.id();

        self.connections.insert(id, connection.clone());
        self.user_connections
            .entry(connection.user_id())
            .or_default()
            .insert(id);

        tracing::debug!(
            connection_id = %id,
            user_id = connection.user_id(),
            "Connection added"
        );

        connection
    }

    /// Remove a connection and clear its room memberships
    pub fn remove_connection(&self, id: ConnectionId) {
        if let Some((_, connection)) = self.connections.remove(&id) {
            self.user_connections
                .alter(&connection.user_id(), |_, mut ids| {
                    ids.remove(&id);
                    ids
                });
            self.user_connections.retain(|_, ids| !ids.is_empty());

            for room in connection.rooms() {
                self.rooms.alter(&room, |_, mut ids| {
                    ids.remove(&id);
                    ids
                });
            }
            self.rooms.retain(|_, ids| !ids.is_empty());

            tracing::debug!(connection_id = %id, "Connection removed");
        }
    }

    /// Subscribe a connection to a room. Idempotent: joining a room the
    /// connection is already in changes nothing.
    pub fn join_room(&self, connection: &Connection, room: RoomId) {
        if connection.join_room(room) {
            self.rooms
                .entry(room)
                .or_default()
                .insert(connection.id());

            tracing::trace!(
                connection_id = %connection.id(),
                room = %room,
                "Joined room"
            );
        }
    }

    /// Unsubscribe a connection from a room
    pub fn leave_room(&self, connection: &Connection, room: RoomId) {
        if connection.leave_room(room) {
            self.rooms.alter(&room, |_, mut ids| {
                ids.remove(&connection.id());
                ids
            });
            self.rooms.retain(|_, ids| !ids.is_empty());

            tracing::trace!(
                connection_id = %connection.id(),
                room = %room,
                "Left room"
            );
        }
    }

    /// Get all connections subscribed to a room
    pub fn room_connections(&self, room: RoomId) -> Vec<Arc<Connection>> {
        self.rooms
            .get(&room)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.connections.get(id).map(|c| c.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Send a message to every connection in a room, optionally skipping
    /// one connection (the broadcast origin). Returns the delivery count.
    pub async fn send_to_room(
        &self,
        room: RoomId,
        message: OutboundMessage,
        exclude: Option<ConnectionId>,
    ) -> usize {
        let mut sent = 0;

        for conn in self.room_connections(room) {
            if exclude == Some(conn.id()) {
                continue;
            }
            if conn.send(message.clone()).await.is_ok() {
                sent += 1;
            }
        }

        tracing::trace!(room = %room, sent, "Message sent to room");

        sent
    }

    /// Send a message to every connection a user holds
    pub async fn send_to_user(&self, user_id: i64, message: OutboundMessage) -> usize {
        let connections: Vec<Arc<Connection>> = self
            .user_connections
            .get(&user_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.connections.get(id).map(|c| c.clone()))
                    .collect()
            })
            .unwrap_or_default();

        let mut sent = 0;
        for conn in connections {
            if conn.send(message.clone()).await.is_ok() {
                sent += 1;
            }
        }

        sent
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn user_count(&self) -> usize {
        self.user_connections.len()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConnectionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionManager")
            .field("connections", &self.connections.len())
            .field("users", &self.user_connections.len())
            .field("rooms", &self.rooms.len())
            .finish()
    }
}
