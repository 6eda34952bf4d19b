//! Event name constants
//!
//! Inbound names use kebab-case; a few outbound names use the colon or
//! snake_case forms the web client listens on. Both sets are frozen wire
//! contract.

/// Inbound (client to gateway) event names
pub mod inbound {
    pub const REGISTER: &str = "register";
    pub const JOIN_COMMUNITY: &str = "join-community";
    pub const JOIN_ADMIN_ROOM: &str = "join-admin-room";
    pub const LEAVE_ADMIN_ROOM: &str = "leave-admin-room";

    pub const ADD_MEMBER: &str = "add-member";
    pub const LEAVE_MEMBER: &str = "leave-member";
    pub const DELETE_MEMBER: &str = "delete-member";
    pub const HANDLE_REQUEST: &str = "handle-request";

    pub const ADD_ADMIN: &str = "add-admin";
    pub const UPDATE_ADMIN: &str = "update-admin";
    pub const DELETE_ADMIN: &str = "delete-admin";

    pub const SEND_MESSAGE: &str = "send-message";
    pub const UPDATE_MESSAGE: &str = "update-message";
    pub const DELETE_MESSAGE: &str = "delete-message";

    pub const SEND_COMMUNITY_MESSAGE: &str = "send-community-message";
    pub const UPDATE_COMMUNITY_MESSAGE: &str = "update-community-message";
    pub const DELETE_COMMUNITY_MESSAGE: &str = "delete-community-message";

    pub const NEW_POST: &str = "new-post";
    pub const UPDATE_POST: &str = "update-post";
    pub const DELETE_POST: &str = "delete-post";
}

/// Outbound (gateway to client) event names
pub mod outbound {
    pub const SUCCESS: &str = "success-message";
    pub const ERROR: &str = "error-message";
    pub const JOINED_ROOM: &str = "joined-room";

    pub const NOTIFICATION_NEW: &str = "notification:new";
    pub const AUDIT_LOG_NEW: &str = "auditlogs:new";
    pub const JOIN_REQUEST_NEW: &str = "joinRequest:new";

    pub const SEND_MESSAGE: &str = "send-message";
    pub const UPDATE_MESSAGE: &str = "update-message";
    pub const DELETE_MESSAGE: &str = "delete-message";

    pub const RECEIVE_COMMUNITY_MESSAGE: &str = "receive-community-message";
    pub const UPDATE_COMMUNITY_MESSAGE: &str = "update-message-community";
    pub const DELETE_COMMUNITY_MESSAGE: &str = "delete-message-community";

    pub const NEW_POST: &str = "new_post";
    pub const UPDATE_POST: &str = "update_post";
    pub const DELETE_POST: &str = "delete_post";
}
