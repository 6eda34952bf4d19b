//! Outbound event payloads

use serde::Serialize;

/// Success envelope emitted on `success-message` and carried by the
/// domain broadcasts.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> SuccessEnvelope<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data,
        }
    }

    /// Envelope without a human-readable message (plain data broadcasts)
    pub fn data_only(data: T) -> Self {
        Self {
            status: "success",
            message: None,
            data,
        }
    }
}
