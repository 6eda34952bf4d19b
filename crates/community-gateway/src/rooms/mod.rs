//! Room identifiers
//!
//! Rooms are named broadcast groups. The string forms are a frozen wire
//! contract shared with the web client:
//!
//! - `user:<userId>` - personal notification channel
//! - `community:<communityId>` - community-wide broadcasts
//! - `community-admin:<communityId>:<area>` - admin consoles per area

use std::fmt;

/// Admin console area within a community
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminArea {
    Users,
    Posts,
    Settings,
}

impl AdminArea {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Posts => "posts",
            Self::Settings => "settings",
        }
    }

    /// Parse the wire form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "users" => Some(Self::Users),
            "posts" => Some(Self::Posts),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }
}

impl fmt::Display for AdminArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A broadcast room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomId {
    /// `user:<userId>`
    User(i64),
    /// `community:<communityId>`
    Community(i64),
    /// `community-admin:<communityId>:<area>`
    CommunityAdmin(i64, AdminArea),
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(id) => write!(f, "user:{id}"),
            Self::Community(id) => write!(f, "community:{id}"),
            Self::CommunityAdmin(id, area) => write!(f, "community-admin:{id}:{area}"),
        }
    }
}
