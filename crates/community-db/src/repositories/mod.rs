//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! community-core. Each repository handles database operations for a
//! specific domain entity.

mod admin;
mod audit_log;
mod community;
mod community_message;
mod error;
mod join_request;
mod membership;
mod notification;
mod post;
mod private_message;
mod user;

pub use admin::PgAdminRepository;
pub use audit_log::PgAuditLogRepository;
pub use community::PgCommunityRepository;
pub use community_message::PgCommunityMessageRepository;
pub use join_request::PgJoinRequestRepository;
pub use membership::PgMembershipRepository;
pub use notification::PgNotificationRepository;
pub use post::PgPostRepository;
pub use private_message::PgPrivateMessageRepository;
pub use user::PgUserRepository;
