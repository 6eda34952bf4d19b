//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer provides
//! the implementation. Each trait is a thin parameterized-query contract:
//! fetch-by-id and fetch-by-composite-key return `Ok(None)` for a missing
//! row rather than erroring, and writes return the affected row.

use async_trait::async_trait;

use crate::entities::{
    AuditLogEntry, Community, CommunityAdmin, CommunityMessage, JoinRequest, Membership,
    NewAuditLogEntry, Notification, NotificationKind, Post, PrivateMessage, User,
};
use crate::error::DomainError;
use crate::value_objects::AdminPermissions;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;
}

// ============================================================================
// Community Repository
// ============================================================================

#[async_trait]
pub trait CommunityRepository: Send + Sync {
    /// Find community by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Community>>;
}

// ============================================================================
// Membership Repository
// ============================================================================

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Find the membership row for a (user, community) pair, active or not.
    ///
    /// At most one row exists per pair; reactivation reuses the row.
    async fn find(&self, user_id: i64, community_id: i64) -> RepoResult<Option<Membership>>;

    /// Insert a new active membership.
    ///
    /// The storage layer enforces at most one row per (user, community);
    /// a lost race surfaces as [`DomainError::DuplicateMembership`].
    async fn create(&self, user_id: i64, community_id: i64) -> RepoResult<Membership>;

    /// Clear `removed_at`/`removed_by` on an existing row ("welcome back")
    async fn reactivate(&self, membership_id: i64) -> RepoResult<Membership>;

    /// Soft-delete a membership. `removed_by` is None for a voluntary
    /// leave and the acting admin's id for a removal.
    async fn remove(&self, membership_id: i64, removed_by: Option<i64>) -> RepoResult<Membership>;
}

// ============================================================================
// Join Request Repository
// ============================================================================

#[async_trait]
pub trait JoinRequestRepository: Send + Sync {
    /// Find a join request by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<JoinRequest>>;

    /// Find the pending request for a (user, community) pair, if any
    async fn find_pending(
        &self,
        user_id: i64,
        community_id: i64,
    ) -> RepoResult<Option<JoinRequest>>;

    /// Insert a new pending request.
    ///
    /// A partial unique constraint keeps at most one pending row per pair;
    /// a lost race surfaces as [`DomainError::DuplicatePendingRequest`].
    async fn create_pending(&self, user_id: i64, community_id: i64) -> RepoResult<JoinRequest>;

    /// Delete a request row (requests are terminal, not archived)
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Admin Repository
// ============================================================================

#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Find the grant for a (community, user) pair
    async fn find(&self, community_id: i64, user_id: i64) -> RepoResult<Option<CommunityAdmin>>;

    /// Insert a new grant
    async fn create(
        &self,
        community_id: i64,
        user_id: i64,
        permissions: AdminPermissions,
    ) -> RepoResult<CommunityAdmin>;

    /// Replace the permission set on an existing grant
    async fn update_permissions(
        &self,
        community_id: i64,
        user_id: i64,
        permissions: AdminPermissions,
    ) -> RepoResult<CommunityAdmin>;

    /// Delete a grant
    async fn delete(&self, community_id: i64, user_id: i64) -> RepoResult<()>;
}

// ============================================================================
// Audit Log Repository
// ============================================================================

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Append an entry. The log is append-only: no update or delete exists.
    async fn append(&self, entry: NewAuditLogEntry) -> RepoResult<AuditLogEntry>;
}

// ============================================================================
// Private Message Repository
// ============================================================================

#[async_trait]
pub trait PrivateMessageRepository: Send + Sync {
    /// Find a message by ID (soft-deleted rows are still returned)
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<PrivateMessage>>;

    /// Insert a new message
    async fn create(
        &self,
        sender_id: i64,
        receiver_id: i64,
        content: &str,
    ) -> RepoResult<PrivateMessage>;

    /// Replace the content and mark the message edited
    async fn update_content(&self, id: i64, content: &str) -> RepoResult<PrivateMessage>;

    /// Set the deletion tombstone; content is retained
    async fn soft_delete(&self, id: i64) -> RepoResult<PrivateMessage>;
}

// ============================================================================
// Community Message Repository
// ============================================================================

#[async_trait]
pub trait CommunityMessageRepository: Send + Sync {
    /// Find a message by ID (soft-deleted rows are still returned)
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<CommunityMessage>>;

    /// Insert a new message
    async fn create(
        &self,
        community_id: i64,
        sender_id: i64,
        content: &str,
    ) -> RepoResult<CommunityMessage>;

    /// Replace the content and mark the message edited
    async fn update_content(&self, id: i64, content: &str) -> RepoResult<CommunityMessage>;

    /// Set the deletion tombstone; content is retained
    async fn soft_delete(&self, id: i64) -> RepoResult<CommunityMessage>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Post>>;

    /// Replace the post content
    async fn update_content(&self, id: i64, content: &str) -> RepoResult<Post>;

    /// Hard-delete a post
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Create a notification. Fire-and-forget from the caller's
    /// perspective, but the created row is what gets broadcast to the
    /// recipient's personal room.
    async fn create(
        &self,
        user_id: i64,
        message: &str,
        kind: NotificationKind,
    ) -> RepoResult<Notification>;
}
