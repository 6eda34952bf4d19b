//! Test fixtures
//!
//! A [`TestBackend`] pairs a shared [`MemStore`] with a service context
//! wired entirely against it, so tests can arrange state through the
//! store and exercise services through the context.

use std::sync::Arc;

use community_core::{AdminPermissions, CommunityPrivacy};
use community_service::ServiceContext;

use crate::memory::MemStore;

/// Common fixture ids
pub const OWNER: i64 = 1;
pub const MEMBER: i64 = 2;
pub const OUTSIDER: i64 = 3;
pub const MODERATOR: i64 = 4;

pub const PUBLIC_COMMUNITY: i64 = 100;
pub const PRIVATE_COMMUNITY: i64 = 200;

/// In-memory backend plus the service context running against it
pub struct TestBackend {
    pub store: Arc<MemStore>,
    pub ctx: ServiceContext,
}

impl TestBackend {
    /// Empty backend
    #[must_use]
    pub fn new() -> Self {
        let store = MemStore::new_shared();
        let ctx = ServiceContext::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
        );
        Self { store, ctx }
    }

    /// Backend pre-seeded with the standard cast: an owner with a public
    /// and a private community, an active member of both, a moderator
    /// holding `manage_users` on both, and an outsider.
    #[must_use]
    pub fn seeded() -> Self {
        let backend = Self::new();
        let store = &backend.store;

        store.seed_user(OWNER, "owner");
        store.seed_user(MEMBER, "member");
        store.seed_user(OUTSIDER, "outsider");
        store.seed_user(MODERATOR, "moderator");

        store.seed_community(PUBLIC_COMMUNITY, "open-space", CommunityPrivacy::Public, OWNER);
        store.seed_community(
            PRIVATE_COMMUNITY,
            "inner-circle",
            CommunityPrivacy::Private,
            OWNER,
        );

        store.seed_membership(OWNER, PUBLIC_COMMUNITY);
        store.seed_membership(OWNER, PRIVATE_COMMUNITY);
        store.seed_membership(MEMBER, PUBLIC_COMMUNITY);
        store.seed_membership(MEMBER, PRIVATE_COMMUNITY);
        store.seed_membership(MODERATOR, PUBLIC_COMMUNITY);
        store.seed_membership(MODERATOR, PRIVATE_COMMUNITY);

        store.seed_admin(PUBLIC_COMMUNITY, MODERATOR, AdminPermissions::MANAGE_USERS);
        store.seed_admin(PRIVATE_COMMUNITY, MODERATOR, AdminPermissions::MANAGE_USERS);

        backend
    }
}

impl Default for TestBackend {
    fn default() -> Self {
        Self::new()
    }
}
