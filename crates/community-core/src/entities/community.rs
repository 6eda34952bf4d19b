//! Community entity

use serde::{Deserialize, Serialize};

/// Community privacy setting
///
/// Public communities admit joiners instantly; private communities gate
/// entry behind a join request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunityPrivacy {
    Public,
    Private,
}

/// Community entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: i64,
    pub name: String,
    pub privacy: CommunityPrivacy,
    /// Owner user id. Ownership is permanent: the owner can neither leave
    /// nor be removed.
    pub created_by: i64,
}

impl Community {
    /// Check whether the given user owns this community
    #[inline]
    pub fn is_owner(&self, user_id: i64) -> bool {
        self.created_by == user_id
    }

    /// Check whether joining requires approval
    #[inline]
    pub fn requires_approval(&self) -> bool {
        self.privacy == CommunityPrivacy::Private
    }
}
