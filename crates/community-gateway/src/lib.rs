//! # community-gateway
//!
//! WebSocket gateway for real-time community events: connection
//! authentication, room management, event dispatch and broadcast routing.

pub mod connection;
pub mod effects;
pub mod handlers;
pub mod protocol;
pub mod rooms;
pub mod server;

pub use server::run;
