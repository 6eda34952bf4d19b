//! Inbound event payloads
//!
//! Every payload is deserialized from the event's JSON data and validated
//! before the service runs. Field names follow the wire's camelCase.

use serde::Deserialize;
use validator::{Validate, ValidationError};

fn validate_request_action(action: &str) -> Result<(), ValidationError> {
    match action {
        "accepted" | "rejected" => Ok(()),
        _ => Err(ValidationError::new("action")
            .with_message("Action must be accepted or rejected".into())),
    }
}

/// Payload for `add-member`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    #[validate(range(min = 1, message = "Community id is required"))]
    pub community_id: i64,
}

/// Payload for `leave-member`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeaveMemberRequest {
    #[validate(range(min = 1, message = "Community id is required"))]
    pub community_id: i64,
}

/// Payload for `delete-member`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMemberRequest {
    #[validate(range(min = 1, message = "Community id is required"))]
    pub community_id: i64,
    #[validate(range(min = 1, message = "Member id is required"))]
    pub member_id: i64,
}

/// Payload for `handle-request`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HandleRequestRequest {
    #[validate(range(min = 1, message = "Community id is required"))]
    pub community_id: i64,
    #[validate(range(min = 1, message = "Request id is required"))]
    pub request_id: i64,
    #[validate(custom(function = "validate_request_action"))]
    pub action: String,
}

/// Payload shared by `add-admin`, `update-admin` and `delete-admin`.
///
/// `permissions` is ignored on delete; on add/update a missing or empty
/// list falls back to the default grant.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminGrantRequest {
    #[validate(range(min = 1, message = "Community id is required"))]
    pub community_id: i64,
    #[serde(rename = "userAdmin")]
    #[validate(range(min = 1, message = "User id is required"))]
    pub user_admin: i64,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

/// Payload for `send-message`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    #[validate(range(min = 1, message = "Receiver id is required"))]
    pub receiver_id: i64,
    #[validate(length(min = 1, max = 150, message = "Content must be 1-150 characters"))]
    pub content: String,
}

/// Payload for `update-message`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
    #[validate(range(min = 1, message = "Message id is required"))]
    pub message_id: i64,
    #[validate(length(min = 1, max = 150, message = "Content must be 1-150 characters"))]
    pub content: String,
}

/// Payload for `delete-message`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMessageRequest {
    #[validate(range(min = 1, message = "Message id is required"))]
    pub message_id: i64,
}

/// Payload for `send-community-message`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendCommunityMessageRequest {
    #[validate(range(min = 1, message = "Community id is required"))]
    pub community_id: i64,
    #[validate(length(min = 1, max = 150, message = "Content must be 1-150 characters"))]
    pub content: String,
}

/// Payload for `update-community-message`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommunityMessageRequest {
    #[validate(range(min = 1, message = "Message id is required"))]
    pub message_id: i64,
    #[validate(length(min = 1, max = 150, message = "Content must be 1-150 characters"))]
    pub content: String,
}

/// Payload for `delete-community-message`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommunityMessageRequest {
    #[validate(range(min = 1, message = "Message id is required"))]
    pub message_id: i64,
}

/// Payload for `update-post`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[validate(range(min = 1, message = "Post id is required"))]
    pub post_id: i64,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

/// Payload for `delete-post`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostRequest {
    #[validate(range(min = 1, message = "Post id is required"))]
    pub post_id: i64,
}
