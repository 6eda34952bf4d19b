//! # community-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `community-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → entity conversions
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use community_db::pool::create_pool;
//! use community_db::repositories::PgMembershipRepository;
//! use community_common::DatabaseConfig;
//! use community_core::MembershipRepository;
//!
//! async fn example(config: &DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(config).await?;
//!     let memberships = PgMembershipRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, PgPool};
pub use repositories::{
    PgAdminRepository, PgAuditLogRepository, PgCommunityMessageRepository, PgCommunityRepository,
    PgJoinRequestRepository, PgMembershipRepository, PgNotificationRepository,
    PgPostRepository, PgPrivateMessageRepository, PgUserRepository,
};
