//! Domain entities

mod admin;
mod audit_log;
mod community;
mod join_request;
mod membership;
mod message;
mod notification;
mod post;
mod user;

pub use admin::CommunityAdmin;
pub use audit_log::{AuditAction, AuditLogEntry, AuditVisibility, NewAuditLogEntry};
pub use community::{Community, CommunityPrivacy};
pub use join_request::{JoinRequest, JoinRequestStatus};
pub use membership::Membership;
pub use message::{CommunityMessage, PrivateMessage};
pub use notification::{Notification, NotificationKind};
pub use post::{Post, PostKind};
pub use user::{Actor, User, UserRole};
