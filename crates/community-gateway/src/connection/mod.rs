//! Connection tracking

mod connection;
mod manager;

pub use connection::{Connection, ConnectionId};
pub use manager::ConnectionManager;
