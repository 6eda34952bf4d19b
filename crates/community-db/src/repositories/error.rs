//! Error handling utilities for repositories

use community_core::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "membership not found" error
pub fn membership_not_found() -> DomainError {
    DomainError::MembershipNotFound
}

/// Create a "join request not found" error
pub fn request_not_found(id: i64) -> DomainError {
    DomainError::RequestNotFound(id)
}

/// Create an "admin grant not found" error
pub fn admin_grant_not_found() -> DomainError {
    DomainError::AdminGrantNotFound
}

/// Create a "message not found" error
pub fn message_not_found(id: i64) -> DomainError {
    DomainError::MessageNotFound(id)
}

/// Create a "post not found" error
pub fn post_not_found(id: i64) -> DomainError {
    DomainError::PostNotFound(id)
}
