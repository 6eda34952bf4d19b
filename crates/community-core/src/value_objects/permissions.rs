//! Admin permission flags for community moderation
//!
//! A community admin holds a subset of three scoped capabilities, stored as
//! a string array in the database and exchanged as string arrays on the wire.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Scoped capabilities granted to a community admin
    ///
    /// Distinct from ownership: the community owner implicitly passes every
    /// permission check without holding a grant.
    pub struct AdminPermissions: u8 {
        /// Remove members, resolve join requests, manage other admins
        const MANAGE_USERS  = 1 << 0;
        /// Edit community settings
        const EDIT_SETTINGS = 1 << 1;
        /// Moderate posts and community messages
        const MANAGE_POSTS  = 1 << 2;
    }
}

impl AdminPermissions {
    /// Fallback grant applied when the caller supplies no usable permissions
    pub const DEFAULT: Self = Self::MANAGE_POSTS;

    /// Parse a single permission name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "manage_users" => Some(Self::MANAGE_USERS),
            "edit_settings" => Some(Self::EDIT_SETTINGS),
            "manage_posts" => Some(Self::MANAGE_POSTS),
            _ => None,
        }
    }

    /// Parse a permission list, dropping unrecognized names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|n| Self::from_name(n.as_ref()))
            .fold(Self::empty(), |acc, p| acc | p)
    }

    /// Normalize a caller-supplied permission list.
    ///
    /// Unrecognized names are silently dropped; an empty or entirely invalid
    /// list falls back to [`Self::DEFAULT`]. This coercion (rather than a
    /// validation rejection) is deliberate and matches the admin-grant
    /// contract.
    pub fn normalize<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = Self::from_names(names);

        if parsed.is_empty() {
            Self::DEFAULT
        } else {
            parsed
        }
    }

    /// Expand into the canonical permission names
    pub fn names(self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.contains(Self::MANAGE_USERS) {
            out.push("manage_users");
        }
        if self.contains(Self::EDIT_SETTINGS) {
            out.push("edit_settings");
        }
        if self.contains(Self::MANAGE_POSTS) {
            out.push("manage_posts");
        }
        out
    }
}

impl Default for AdminPermissions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for AdminPermissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join(","))
    }
}

impl Serialize for AdminPermissions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.names().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AdminPermissions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::normalize(names))
    }
}
