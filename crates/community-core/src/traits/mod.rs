//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AdminRepository, AuditLogRepository, CommunityMessageRepository, CommunityRepository,
    JoinRequestRepository, MembershipRepository, NotificationRepository, PostRepository,
    PrivateMessageRepository, RepoResult, UserRepository,
};
