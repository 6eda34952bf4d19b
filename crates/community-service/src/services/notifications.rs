//! Notification message templates
//!
//! Every notification kind has exactly one template. Services build the
//! text here so wording stays consistent across operations.

/// Membership granted (instant join or accepted request)
pub fn joined_community(community_name: &str) -> String {
    format!("You joined the community {community_name}")
}

/// Join request rejected
pub fn request_rejected(community_name: &str) -> String {
    format!("Your request to join {community_name} was rejected")
}

/// Admin grant created
pub fn promoted_to_admin(community_name: &str) -> String {
    format!("You are now an admin in {community_name}")
}

/// Admin grant permissions replaced
pub fn admin_permissions_updated(community_name: &str) -> String {
    format!("Your admin permissions in {community_name} have been updated")
}

/// Admin grant revoked
pub fn demoted_from_admin(community_name: &str) -> String {
    format!("You are no longer an admin in {community_name}")
}
