//! Service layer error types
//!
//! Provides a unified error type for all service operations, classified
//! with the status taxonomy consumed by the gateway's single
//! error-translation point: 401 unauthenticated, 403 forbidden, 404 not
//! found, 400 invalid state / validation, 500 unexpected.

use community_core::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rules::DenyStatus;

/// One offending field in a rejected payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation surfaced from a repository
    Domain(DomainError),

    /// No verified actor on the connection/event
    Unauthenticated(&'static str),

    /// Authenticated but the policy check failed
    Forbidden(String),

    /// Referenced aggregate does not exist
    NotFound(String),

    /// Operation not valid given the current state
    InvalidState(String),

    /// Payload failed shape/constraint validation; one message per
    /// offending field, de-duplicated by field name
    Validation(Vec<FieldError>),

    /// Anything else; the detail is logged, never sent to the caller
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::Unauthenticated(msg) => write!(f, "{msg}"),
            Self::Forbidden(msg) | Self::NotFound(msg) | Self::InvalidState(msg) => {
                write!(f, "{msg}")
            }
            Self::Validation(errors) => {
                let joined = errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Validation error: {joined}")
            }
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a forbidden error
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid-state error
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Convert a rule rejection into the matching error variant
    pub fn from_deny(reason: &'static str, status: DenyStatus) -> Self {
        match status {
            DenyStatus::Unauthenticated => Self::Unauthenticated(reason),
            DenyStatus::Forbidden => Self::Forbidden(reason.to_string()),
            DenyStatus::InvalidState => Self::InvalidState(reason.to_string()),
        }
    }

    /// Get the status classification for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_conflict() {
                    400
                } else {
                    500
                }
            }
            Self::Unauthenticated(_) => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::InvalidState(_) | Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Message safe to send to the caller. Internal details (repository
    /// failures, unexpected errors) are replaced with a generic string.
    pub fn client_message(&self) -> String {
        if self.status_code() == 500 {
            "Something went wrong".to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                // One message per field; the first constraint violation wins
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map_or_else(|| format!("{field} is invalid"), ToString::to_string);
                FieldError::new(field.to_string(), message)
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        Self::Validation(fields)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
