//! Message framing

use community_service::{FieldError, ServiceError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound frame: an event name plus its JSON payload
#[derive(Debug, Clone, Deserialize)]
pub struct ClientEvent {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

impl ClientEvent {
    /// Parse a raw text frame
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Outbound frame: an event name plus its serialized payload
#[derive(Debug, Clone, Serialize)]
pub struct OutboundMessage {
    pub event: &'static str,
    pub data: Value,
}

impl OutboundMessage {
    /// Build a frame; serialization failures collapse to a null payload
    /// (payload types are plain data and serialize infallibly in practice).
    pub fn new<T: Serialize>(event: &'static str, data: &T) -> Self {
        Self {
            event,
            data: serde_json::to_value(data).unwrap_or(Value::Null),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Error payload sent on `error-message`, always only to the originating
/// connection.
///
/// Validation failures carry a field list; every other failure carries a
/// single message.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorPayload {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            errors: None,
        }
    }
}

impl From<&ServiceError> for ErrorPayload {
    fn from(err: &ServiceError) -> Self {
        match err {
            ServiceError::Validation(fields) => Self {
                status: err.status_code(),
                message: None,
                errors: Some(fields.clone()),
            },
            _ => Self::new(err.status_code(), err.client_message()),
        }
    }
}
