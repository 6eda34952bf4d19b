//! Individual WebSocket connection

use std::collections::HashSet;
use std::sync::Arc;

use community_core::Actor;
use parking_lot::RwLock;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::protocol::OutboundMessage;
use crate::rooms::RoomId;

/// Unique identifier for one WebSocket connection
pub type ConnectionId = Uuid;

/// A single authenticated WebSocket connection.
///
/// The actor identity is verified before the upgrade and immutable for
/// the connection's lifetime. Room membership is the only mutable state.
pub struct Connection {
    id: ConnectionId,
    actor: Actor,
    sender: mpsc::Sender<OutboundMessage>,
    rooms: RwLock<HashSet<RoomId>>,
}

impl Connection {
    pub fn new(actor: Actor, sender: mpsc::Sender<OutboundMessage>) -> Arc<Self> {
        Arc::new(Self {
            id: Uuid::new_v4(),
            actor,
            sender,
            rooms: RwLock::new(HashSet::new()),
        })
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn user_id(&self) -> i64 {
        self.actor.id
    }

    /// Track a joined room. Returns false when the connection was already
    /// in the room, making repeat joins a no-op for the caller.
    pub fn join_room(&self, room: RoomId) -> bool {
        self.rooms.write().insert(room)
    }

    /// Drop a room subscription
    pub fn leave_room(&self, room: RoomId) -> bool {
        self.rooms.write().remove(&room)
    }

    pub fn is_in_room(&self, room: RoomId) -> bool {
        self.rooms.read().contains(&room)
    }

    pub fn rooms(&self) -> Vec<RoomId> {
        self.rooms.read().iter().copied().collect()
    }

    /// Queue a message for delivery on this connection
    pub async fn send(
        &self,
        message: OutboundMessage,
    ) -> Result<(), mpsc::error::SendError<OutboundMessage>> {
        self.sender.send(message).await
    }

    /// Queue a message without waiting; fails when the channel is full
    pub fn try_send(
        &self,
        message: OutboundMessage,
    ) -> Result<(), mpsc::error::TrySendError<OutboundMessage>> {
        self.sender.try_send(message)
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("id", &self.id)
            .field("user_id", &self.actor.id)
            .field("rooms", &self.rooms.read().len())
            .finish()
    }
}
