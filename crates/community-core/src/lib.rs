//! # community-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Actor, AuditAction, AuditLogEntry, AuditVisibility, Community, CommunityAdmin,
    CommunityMessage, CommunityPrivacy, JoinRequest, JoinRequestStatus, Membership,
    NewAuditLogEntry, Notification, NotificationKind, Post, PostKind, PrivateMessage, User,
    UserRole,
};
pub use error::DomainError;
pub use traits::{
    AdminRepository, AuditLogRepository, CommunityMessageRepository, CommunityRepository,
    JoinRequestRepository, MembershipRepository, NotificationRepository, PostRepository,
    PrivateMessageRepository, RepoResult, UserRepository,
};
pub use value_objects::AdminPermissions;
