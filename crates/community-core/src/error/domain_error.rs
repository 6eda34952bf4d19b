//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// Raised by repository implementations. "Not found" lookups return
/// `Ok(None)` from the repositories; the `*NotFound` variants exist for
/// writes that target a missing row.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Community not found: {0}")]
    CommunityNotFound(i64),

    #[error("Membership not found")]
    MembershipNotFound,

    #[error("Join request not found: {0}")]
    RequestNotFound(i64),

    #[error("Admin grant not found")]
    AdminGrantNotFound,

    #[error("Message not found: {0}")]
    MessageNotFound(i64),

    #[error("Post not found: {0}")]
    PostNotFound(i64),

    // =========================================================================
    // Conflict Errors
    //
    // Produced when a storage uniqueness constraint trips. Lost races on
    // read-modify-write sequences surface here instead of as silent
    // duplication.
    // =========================================================================
    #[error("An active membership already exists for this user")]
    DuplicateMembership,

    #[error("A pending join request already exists for this user")]
    DuplicatePendingRequest,

    #[error("An admin grant already exists for this user")]
    DuplicateAdminGrant,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Check if this is a not-found error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::CommunityNotFound(_)
                | Self::MembershipNotFound
                | Self::RequestNotFound(_)
                | Self::AdminGrantNotFound
                | Self::MessageNotFound(_)
                | Self::PostNotFound(_)
        )
    }

    /// Check if this is a conflict error
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateMembership | Self::DuplicatePendingRequest | Self::DuplicateAdminGrant
        )
    }
}
