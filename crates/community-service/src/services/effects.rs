//! Side-effect list returned by domain services
//!
//! Services never emit to the transport. Instead of interleaving
//! notification/audit writes with business logic, each operation returns
//! the secondary effects it produced alongside its primary result; the
//! gateway executes them after the primary write, best-effort. A failed
//! secondary effect is logged and does not fail the operation.

use community_core::{JoinRequest, NewAuditLogEntry, NotificationKind};

/// A secondary effect to perform after the primary write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Create a notification row and deliver it to `user:<user_id>`
    Notify {
        user_id: i64,
        message: String,
        kind: NotificationKind,
    },

    /// Append an audit entry; public entries are additionally broadcast to
    /// `community:<id>`, private entries are never broadcast.
    /// `exclude_origin` skips the originating connection on the broadcast
    /// (used for leave, where the leaver has already left the room).
    Audit {
        entry: NewAuditLogEntry,
        exclude_origin: bool,
    },

    /// Announce a new join request to `community-admin:<id>:users` only
    JoinRequestAlert {
        community_id: i64,
        request: JoinRequest,
    },

    /// Unsubscribe the originating connection from `community:<id>`
    LeaveCommunityRoom { community_id: i64 },
}

impl Effect {
    /// Shorthand for a notification effect
    pub fn notify(user_id: i64, message: String, kind: NotificationKind) -> Self {
        Self::Notify {
            user_id,
            message,
            kind,
        }
    }

    /// Shorthand for an audit effect broadcast to the whole room
    pub fn audit(entry: NewAuditLogEntry) -> Self {
        Self::Audit {
            entry,
            exclude_origin: false,
        }
    }

    /// Shorthand for an audit effect excluding the originating connection
    pub fn audit_excluding_origin(entry: NewAuditLogEntry) -> Self {
        Self::Audit {
            entry,
            exclude_origin: true,
        }
    }
}

/// Primary result of a service operation plus its secondary effects
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    /// Human-readable success message for the caller
    pub message: &'static str,
    /// Primary payload (the created/updated row)
    pub data: T,
    /// Secondary effects for the gateway to execute
    pub effects: Vec<Effect>,
}

impl<T> Outcome<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self {
            message,
            data,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}
