//! Database models - SQLx-compatible structs for PostgreSQL tables
//!
//! Enum-valued columns are stored as text and parsed during the model →
//! entity conversion; an unrecognized value surfaces as a database error
//! rather than panicking.

mod admin;
mod audit_log;
mod community;
mod join_request;
mod membership;
mod message;
mod notification;
mod post;
mod user;

pub use admin::CommunityAdminModel;
pub use audit_log::AuditLogModel;
pub use community::CommunityModel;
pub use join_request::JoinRequestModel;
pub use membership::MembershipModel;
pub use message::{CommunityMessageModel, PrivateMessageModel};
pub use notification::NotificationModel;
pub use post::PostModel;
pub use user::UserModel;

pub(crate) use audit_log::{action_str, visibility_str};
pub(crate) use notification::kind_str;

use community_core::DomainError;

/// Error for a text column holding a value outside the expected enum
pub(crate) fn bad_enum(column: &str, value: &str) -> DomainError {
    DomainError::DatabaseError(format!("unexpected {column} value: {value}"))
}
