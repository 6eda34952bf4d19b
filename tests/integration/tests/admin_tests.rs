//! Admin grant flow tests

use community_core::{AdminPermissions, NotificationKind};
use community_service::dto::AdminGrantRequest;
use community_service::{AdminService, Effect};
use integration_tests::{TestBackend, MEMBER, MODERATOR, OUTSIDER, OWNER, PUBLIC_COMMUNITY};

fn grant_req(user_admin: i64, permissions: Option<Vec<&str>>) -> AdminGrantRequest {
    AdminGrantRequest {
        community_id: PUBLIC_COMMUNITY,
        user_admin,
        permissions: permissions.map(|p| p.into_iter().map(String::from).collect()),
    }
}

#[tokio::test]
async fn test_owner_grants_admin() {
    let backend = TestBackend::seeded();
    let service = AdminService::new(&backend.ctx);

    let outcome = service
        .grant(OWNER, &grant_req(MEMBER, Some(vec!["manage_users", "manage_posts"])))
        .await
        .unwrap();

    assert_eq!(outcome.message, "Admin added successfully");
    let grant = backend.store.admin_grant(PUBLIC_COMMUNITY, MEMBER).unwrap();
    assert!(grant.has(AdminPermissions::MANAGE_USERS));
    assert!(grant.has(AdminPermissions::MANAGE_POSTS));
    assert!(!grant.has(AdminPermissions::EDIT_SETTINGS));

    assert!(outcome.effects.iter().any(|e| matches!(
        e,
        Effect::Notify { user_id, kind: NotificationKind::YourAdmin, message }
            if *user_id == MEMBER && message == "You are now an admin in open-space"
    )));
}

#[tokio::test]
async fn test_missing_permissions_fall_back_to_default() {
    let backend = TestBackend::seeded();
    let service = AdminService::new(&backend.ctx);

    service.grant(OWNER, &grant_req(MEMBER, None)).await.unwrap();

    let grant = backend.store.admin_grant(PUBLIC_COMMUNITY, MEMBER).unwrap();
    assert_eq!(grant.permissions, AdminPermissions::DEFAULT);
}

#[tokio::test]
async fn test_unknown_permission_names_are_dropped() {
    let backend = TestBackend::seeded();
    let service = AdminService::new(&backend.ctx);

    service
        .grant(OWNER, &grant_req(MEMBER, Some(vec!["edit_settings", "superuser"])))
        .await
        .unwrap();

    let grant = backend.store.admin_grant(PUBLIC_COMMUNITY, MEMBER).unwrap();
    assert_eq!(grant.permissions, AdminPermissions::EDIT_SETTINGS);

    // An entirely invalid list coerces to the default grant
    let backend = TestBackend::seeded();
    let service = AdminService::new(&backend.ctx);
    service
        .grant(OWNER, &grant_req(MEMBER, Some(vec!["root", "sudo"])))
        .await
        .unwrap();
    let grant = backend.store.admin_grant(PUBLIC_COMMUNITY, MEMBER).unwrap();
    assert_eq!(grant.permissions, AdminPermissions::DEFAULT);
}

#[tokio::test]
async fn test_duplicate_grant_rejected() {
    let backend = TestBackend::seeded();
    let service = AdminService::new(&backend.ctx);

    let err = service
        .grant(OWNER, &grant_req(MODERATOR, None))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
    assert_eq!(err.to_string(), "User is already an admin");
}

#[tokio::test]
async fn test_grant_requires_user_management() {
    let backend = TestBackend::seeded();
    let service = AdminService::new(&backend.ctx);

    let err = service
        .grant(MEMBER, &grant_req(OUTSIDER, None))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 403);
    assert_eq!(err.to_string(), "You are not authorized to add admins");
}

#[tokio::test]
async fn test_moderator_with_manage_users_can_grant() {
    let backend = TestBackend::seeded();
    let service = AdminService::new(&backend.ctx);

    let outcome = service
        .grant(MODERATOR, &grant_req(MEMBER, Some(vec!["manage_posts"])))
        .await
        .unwrap();

    assert_eq!(outcome.message, "Admin added successfully");
}

#[tokio::test]
async fn test_update_replaces_permission_set() {
    let backend = TestBackend::seeded();
    let service = AdminService::new(&backend.ctx);

    let outcome = service
        .update(OWNER, &grant_req(MODERATOR, Some(vec!["edit_settings"])))
        .await
        .unwrap();

    assert_eq!(outcome.message, "Admin updated successfully");
    let grant = backend.store.admin_grant(PUBLIC_COMMUNITY, MODERATOR).unwrap();
    assert_eq!(grant.permissions, AdminPermissions::EDIT_SETTINGS);
    assert!(!grant.has(AdminPermissions::MANAGE_USERS));

    assert!(outcome.effects.iter().any(|e| matches!(
        e,
        Effect::Notify { kind: NotificationKind::UpdateAdmin, message, .. }
            if message == "Your admin permissions in open-space have been updated"
    )));
}

#[tokio::test]
async fn test_update_nonexistent_grant_rejected() {
    let backend = TestBackend::seeded();
    let service = AdminService::new(&backend.ctx);

    let err = service
        .update(OWNER, &grant_req(MEMBER, Some(vec!["manage_posts"])))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
    assert_eq!(err.to_string(), "This user is not an admin in this community");
}

#[tokio::test]
async fn test_update_requires_user_management() {
    let backend = TestBackend::seeded();
    let service = AdminService::new(&backend.ctx);

    let err = service
        .update(MEMBER, &grant_req(MODERATOR, Some(vec!["manage_posts"])))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 403);
    assert_eq!(err.to_string(), "You are not authorized to update admins");
}

#[tokio::test]
async fn test_revoke_deletes_grant_and_notifies() {
    let backend = TestBackend::seeded();
    let service = AdminService::new(&backend.ctx);

    let outcome = service
        .revoke(OWNER, &grant_req(MODERATOR, None))
        .await
        .unwrap();

    assert_eq!(outcome.message, "Deleted admin successfully");
    assert!(backend.store.admin_grant(PUBLIC_COMMUNITY, MODERATOR).is_none());

    assert!(outcome.effects.iter().any(|e| matches!(
        e,
        Effect::Notify { user_id, kind: NotificationKind::RemoveAdmin, message }
            if *user_id == MODERATOR && message == "You are no longer an admin in open-space"
    )));
}

#[tokio::test]
async fn test_revoke_nonexistent_grant_rejected() {
    let backend = TestBackend::seeded();
    let service = AdminService::new(&backend.ctx);

    let err = service
        .revoke(OWNER, &grant_req(MEMBER, None))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
    assert_eq!(err.to_string(), "This user is not an admin in this community");
}

#[tokio::test]
async fn test_revoke_requires_user_management() {
    let backend = TestBackend::seeded();
    let service = AdminService::new(&backend.ctx);

    let err = service
        .revoke(MEMBER, &grant_req(MODERATOR, None))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 403);
    assert_eq!(err.to_string(), "You are not authorized to delete admins");
}
