//! Domain services
//!
//! Each service borrows the shared [`ServiceContext`] and exposes the
//! operations for one aggregate. Operations validate their payload, run
//! the authorization rules, perform the primary write, and return an
//! [`Outcome`] carrying the secondary effects for the gateway to execute.

pub mod admin;
pub mod community_message;
pub mod context;
pub mod effects;
pub mod error;
pub mod membership;
pub mod notifications;
pub mod post;
pub mod private_message;

pub use admin::AdminService;
pub use community_message::CommunityMessageService;
pub use context::ServiceContext;
pub use effects::{Effect, Outcome};
pub use error::{FieldError, ServiceError, ServiceResult};
pub use membership::{JoinData, MembershipService, RequestAction};
pub use post::{DeletedPost, PostService};
pub use private_message::PrivateMessageService;
