//! Wire protocol - event names and message framing
//!
//! Every frame is a JSON object `{"event": "...", "data": ...}` in both
//! directions. Event names are fixed strings; payloads are JSON values
//! deserialized into the matching DTO by the handler.

pub mod events;
pub mod messages;

pub use messages::{ClientEvent, ErrorPayload, OutboundMessage};
