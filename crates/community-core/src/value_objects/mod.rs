//! Value objects - immutable domain primitives

mod permissions;

pub use permissions::AdminPermissions;
