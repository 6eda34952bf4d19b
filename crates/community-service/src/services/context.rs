//! Service context - dependency container for the service layer
//!
//! Holds the repository handles every domain service borrows from. Built
//! once at startup and shared behind an `Arc` by the gateway.

use std::fmt;
use std::sync::Arc;

use community_core::{
    AdminRepository, AuditLogRepository, CommunityMessageRepository, CommunityRepository,
    JoinRequestRepository, MembershipRepository, NotificationRepository, PostRepository,
    PrivateMessageRepository, UserRepository,
};

/// Shared dependency container for domain services
#[derive(Clone)]
pub struct ServiceContext {
    users: Arc<dyn UserRepository>,
    communities: Arc<dyn CommunityRepository>,
    memberships: Arc<dyn MembershipRepository>,
    join_requests: Arc<dyn JoinRequestRepository>,
    admins: Arc<dyn AdminRepository>,
    audit_logs: Arc<dyn AuditLogRepository>,
    private_messages: Arc<dyn PrivateMessageRepository>,
    community_messages: Arc<dyn CommunityMessageRepository>,
    posts: Arc<dyn PostRepository>,
    notifications: Arc<dyn NotificationRepository>,
}

impl ServiceContext {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        users: Arc<dyn UserRepository>,
        communities: Arc<dyn CommunityRepository>,
        memberships: Arc<dyn MembershipRepository>,
        join_requests: Arc<dyn JoinRequestRepository>,
        admins: Arc<dyn AdminRepository>,
        audit_logs: Arc<dyn AuditLogRepository>,
        private_messages: Arc<dyn PrivateMessageRepository>,
        community_messages: Arc<dyn CommunityMessageRepository>,
        posts: Arc<dyn PostRepository>,
        notifications: Arc<dyn NotificationRepository>,
    ) -> Self {
        Self {
            users,
            communities,
            memberships,
            join_requests,
            admins,
            audit_logs,
            private_messages,
            community_messages,
            posts,
            notifications,
        }
    }

    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }

    pub fn communities(&self) -> &dyn CommunityRepository {
        self.communities.as_ref()
    }

    pub fn memberships(&self) -> &dyn MembershipRepository {
        self.memberships.as_ref()
    }

    pub fn join_requests(&self) -> &dyn JoinRequestRepository {
        self.join_requests.as_ref()
    }

    pub fn admins(&self) -> &dyn AdminRepository {
        self.admins.as_ref()
    }

    pub fn audit_logs(&self) -> &dyn AuditLogRepository {
        self.audit_logs.as_ref()
    }

    pub fn private_messages(&self) -> &dyn PrivateMessageRepository {
        self.private_messages.as_ref()
    }

    pub fn community_messages(&self) -> &dyn CommunityMessageRepository {
        self.community_messages.as_ref()
    }

    pub fn posts(&self) -> &dyn PostRepository {
        self.posts.as_ref()
    }

    pub fn notifications(&self) -> &dyn NotificationRepository {
        self.notifications.as_ref()
    }
}

impl fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceContext").finish_non_exhaustive()
    }
}
