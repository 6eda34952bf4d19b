//! Integration test utilities for the community gateway
//!
//! Provides an in-memory storage backend implementing every repository
//! trait, plus fixtures that wire it into a service context so full
//! service flows run without PostgreSQL.

pub mod fixtures;

pub use fixtures::*;
pub use memory::MemStore;
