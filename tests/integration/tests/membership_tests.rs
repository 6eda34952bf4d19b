//! Membership flow tests
//!
//! Exercises the join state machine, voluntary leave, admin removal and
//! join request review against the in-memory backend.

use community_core::{AuditAction, AuditVisibility, NotificationKind};
use community_service::dto::{
    AddMemberRequest, DeleteMemberRequest, HandleRequestRequest, LeaveMemberRequest,
};
use community_service::{Effect, JoinData, MembershipService, ServiceError};
use integration_tests::{
    TestBackend, MEMBER, MODERATOR, OUTSIDER, OWNER, PRIVATE_COMMUNITY, PUBLIC_COMMUNITY,
};

fn join_req(community_id: i64) -> AddMemberRequest {
    AddMemberRequest { community_id }
}

// ============================================================================
// Joining
// ============================================================================

#[tokio::test]
async fn test_public_join_creates_active_membership() {
    let backend = TestBackend::seeded();
    let service = MembershipService::new(&backend.ctx);

    let outcome = service
        .join(OUTSIDER, &join_req(PUBLIC_COMMUNITY))
        .await
        .unwrap();

    assert_eq!(outcome.message, "Added member successfully");
    assert!(matches!(outcome.data, JoinData::Membership(_)));

    let membership = backend.store.membership_of(OUTSIDER, PUBLIC_COMMUNITY).unwrap();
    assert!(membership.is_active());
    assert_eq!(backend.store.membership_rows(OUTSIDER, PUBLIC_COMMUNITY), 1);

    assert!(outcome.effects.iter().any(|e| matches!(
        e,
        Effect::Audit { entry, exclude_origin: false }
            if entry.action == AuditAction::Join && entry.visibility == AuditVisibility::Public
    )));
    assert!(outcome.effects.iter().any(|e| matches!(
        e,
        Effect::Notify { user_id, kind: NotificationKind::JoinCommunity, message }
            if *user_id == OUTSIDER && message == "You joined the community open-space"
    )));
}

#[tokio::test]
async fn test_active_member_cannot_join_again() {
    let backend = TestBackend::seeded();
    let service = MembershipService::new(&backend.ctx);

    let err = service
        .join(MEMBER, &join_req(PUBLIC_COMMUNITY))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
    assert_eq!(err.to_string(), "You are already a member in this community");
    assert_eq!(backend.store.membership_rows(MEMBER, PUBLIC_COMMUNITY), 1);
}

#[tokio::test]
async fn test_private_join_files_pending_request() {
    let backend = TestBackend::seeded();
    let service = MembershipService::new(&backend.ctx);

    let outcome = service
        .join(OUTSIDER, &join_req(PRIVATE_COMMUNITY))
        .await
        .unwrap();

    assert_eq!(outcome.message, "Your join request is pending approval");
    assert!(matches!(outcome.data, JoinData::Request(_)));
    assert_eq!(backend.store.pending_requests(OUTSIDER, PRIVATE_COMMUNITY), 1);
    assert!(backend.store.membership_of(OUTSIDER, PRIVATE_COMMUNITY).is_none());

    // The alert targets the admin console, never the community room
    assert!(outcome.effects.iter().any(|e| matches!(
        e,
        Effect::JoinRequestAlert { community_id, .. } if *community_id == PRIVATE_COMMUNITY
    )));
    assert!(!outcome
        .effects
        .iter()
        .any(|e| matches!(e, Effect::Audit { .. })));
}

#[tokio::test]
async fn test_second_request_rejected_while_one_is_pending() {
    let backend = TestBackend::seeded();
    let service = MembershipService::new(&backend.ctx);

    service
        .join(OUTSIDER, &join_req(PRIVATE_COMMUNITY))
        .await
        .unwrap();
    let err = service
        .join(OUTSIDER, &join_req(PRIVATE_COMMUNITY))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
    assert_eq!(err.to_string(), "You already have a pending join request");
    assert_eq!(backend.store.pending_requests(OUTSIDER, PRIVATE_COMMUNITY), 1);
}

#[tokio::test]
async fn test_voluntary_leaver_is_welcomed_back_to_public_community() {
    let backend = TestBackend::seeded();
    backend
        .store
        .seed_removed_membership(OUTSIDER, PUBLIC_COMMUNITY, None);
    let service = MembershipService::new(&backend.ctx);

    let outcome = service
        .join(OUTSIDER, &join_req(PUBLIC_COMMUNITY))
        .await
        .unwrap();

    assert_eq!(outcome.message, "Welcome back to the community");
    // The prior row is reactivated, not duplicated
    assert_eq!(backend.store.membership_rows(OUTSIDER, PUBLIC_COMMUNITY), 1);
    let membership = backend.store.membership_of(OUTSIDER, PUBLIC_COMMUNITY).unwrap();
    assert!(membership.is_active());
    assert!(membership.removed_by.is_none());
}

#[tokio::test]
async fn test_voluntary_leaver_of_private_community_needs_a_request() {
    let backend = TestBackend::seeded();
    backend
        .store
        .seed_removed_membership(OUTSIDER, PRIVATE_COMMUNITY, None);
    let service = MembershipService::new(&backend.ctx);

    let outcome = service
        .join(OUTSIDER, &join_req(PRIVATE_COMMUNITY))
        .await
        .unwrap();

    assert!(matches!(outcome.data, JoinData::Request(_)));
    assert_eq!(backend.store.pending_requests(OUTSIDER, PRIVATE_COMMUNITY), 1);
    let membership = backend.store.membership_of(OUTSIDER, PRIVATE_COMMUNITY).unwrap();
    assert!(!membership.is_active());
}

#[tokio::test]
async fn test_admin_removed_user_needs_a_request_even_in_public_community() {
    let backend = TestBackend::seeded();
    backend
        .store
        .seed_removed_membership(OUTSIDER, PUBLIC_COMMUNITY, Some(MODERATOR));
    let service = MembershipService::new(&backend.ctx);

    let outcome = service
        .join(OUTSIDER, &join_req(PUBLIC_COMMUNITY))
        .await
        .unwrap();

    assert!(matches!(outcome.data, JoinData::Request(_)));
    assert_eq!(backend.store.pending_requests(OUTSIDER, PUBLIC_COMMUNITY), 1);
}

#[tokio::test]
async fn test_join_unknown_community_not_found() {
    let backend = TestBackend::seeded();
    let service = MembershipService::new(&backend.ctx);

    let err = service.join(OUTSIDER, &join_req(999)).await.unwrap_err();

    assert_eq!(err.status_code(), 404);
    assert_eq!(err.to_string(), "Community not found");
}

#[tokio::test]
async fn test_join_payload_validation() {
    let backend = TestBackend::seeded();
    let service = MembershipService::new(&backend.ctx);

    let err = service.join(OUTSIDER, &join_req(0)).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(err.status_code(), 400);
}

// ============================================================================
// Leaving
// ============================================================================

#[tokio::test]
async fn test_leave_soft_deletes_and_announces_without_the_leaver() {
    let backend = TestBackend::seeded();
    let service = MembershipService::new(&backend.ctx);

    let outcome = service
        .leave(
            MEMBER,
            &LeaveMemberRequest {
                community_id: PUBLIC_COMMUNITY,
            },
        )
        .await
        .unwrap();

    assert_eq!(outcome.message, "Deleted member successfully");
    let membership = backend.store.membership_of(MEMBER, PUBLIC_COMMUNITY).unwrap();
    assert!(membership.left_voluntarily());

    assert!(outcome.effects.iter().any(|e| matches!(
        e,
        Effect::Audit { entry, exclude_origin: true }
            if entry.action == AuditAction::Leave && entry.visibility == AuditVisibility::Public
    )));
    assert!(outcome.effects.iter().any(|e| matches!(
        e,
        Effect::LeaveCommunityRoom { community_id } if *community_id == PUBLIC_COMMUNITY
    )));
}

#[tokio::test]
async fn test_owner_cannot_leave() {
    let backend = TestBackend::seeded();
    let service = MembershipService::new(&backend.ctx);

    let err = service
        .leave(
            OWNER,
            &LeaveMemberRequest {
                community_id: PUBLIC_COMMUNITY,
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
    assert_eq!(err.to_string(), "Community owners cannot leave their community");
}

#[tokio::test]
async fn test_leave_without_active_membership_not_found() {
    let backend = TestBackend::seeded();
    let service = MembershipService::new(&backend.ctx);

    let err = service
        .leave(
            OUTSIDER,
            &LeaveMemberRequest {
                community_id: PUBLIC_COMMUNITY,
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 404);
    assert_eq!(err.to_string(), "Member not found");
}

// ============================================================================
// Removal
// ============================================================================

#[tokio::test]
async fn test_moderator_removes_member() {
    let backend = TestBackend::seeded();
    let service = MembershipService::new(&backend.ctx);

    let outcome = service
        .remove_member(
            MODERATOR,
            &DeleteMemberRequest {
                community_id: PUBLIC_COMMUNITY,
                member_id: MEMBER,
            },
        )
        .await
        .unwrap();

    assert_eq!(outcome.message, "Remove member successfully");
    let membership = backend.store.membership_of(MEMBER, PUBLIC_COMMUNITY).unwrap();
    assert!(membership.removed_by_admin());
    assert_eq!(membership.removed_by, Some(MODERATOR));

    assert!(outcome.effects.iter().any(|e| matches!(
        e,
        Effect::Audit { entry, .. } if entry.action == AuditAction::Remove
    )));
}

#[tokio::test]
async fn test_plain_member_cannot_remove_others() {
    let backend = TestBackend::seeded();
    let service = MembershipService::new(&backend.ctx);

    let err = service
        .remove_member(
            MEMBER,
            &DeleteMemberRequest {
                community_id: PUBLIC_COMMUNITY,
                member_id: MODERATOR,
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 403);
    assert_eq!(err.to_string(), "You are not authorized to delete this user");
}

#[tokio::test]
async fn test_admins_cannot_remove_themselves() {
    let backend = TestBackend::seeded();
    let service = MembershipService::new(&backend.ctx);

    let err = service
        .remove_member(
            MODERATOR,
            &DeleteMemberRequest {
                community_id: PUBLIC_COMMUNITY,
                member_id: MODERATOR,
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
    assert_eq!(err.to_string(), "Admins cannot remove themselves");
}

#[tokio::test]
async fn test_owner_cannot_be_removed() {
    let backend = TestBackend::seeded();
    let service = MembershipService::new(&backend.ctx);

    let err = service
        .remove_member(
            MODERATOR,
            &DeleteMemberRequest {
                community_id: PUBLIC_COMMUNITY,
                member_id: OWNER,
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
    assert_eq!(err.to_string(), "Community owners cannot be removed");
}

#[tokio::test]
async fn test_remove_missing_member_not_found() {
    let backend = TestBackend::seeded();
    let service = MembershipService::new(&backend.ctx);

    let err = service
        .remove_member(
            MODERATOR,
            &DeleteMemberRequest {
                community_id: PUBLIC_COMMUNITY,
                member_id: OUTSIDER,
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 404);
    assert_eq!(err.to_string(), "Not found member in this community");
}

// ============================================================================
// Join request review
// ============================================================================

#[tokio::test]
async fn test_accept_creates_membership_and_deletes_request() {
    let backend = TestBackend::seeded();
    let request_id = backend
        .store
        .seed_pending_request(OUTSIDER, PRIVATE_COMMUNITY);
    let service = MembershipService::new(&backend.ctx);

    let outcome = service
        .resolve_request(
            MODERATOR,
            &HandleRequestRequest {
                community_id: PRIVATE_COMMUNITY,
                request_id,
                action: "accepted".into(),
            },
        )
        .await
        .unwrap();

    assert_eq!(outcome.message, "Request accepted");
    assert!(!backend.store.request_exists(request_id));
    let membership = backend.store.membership_of(OUTSIDER, PRIVATE_COMMUNITY).unwrap();
    assert!(membership.is_active());

    assert!(outcome.effects.iter().any(|e| matches!(
        e,
        Effect::Audit { entry, .. }
            if entry.action == AuditAction::Accept && entry.visibility == AuditVisibility::Public
    )));
    assert!(outcome.effects.iter().any(|e| matches!(
        e,
        Effect::Notify { user_id, kind: NotificationKind::JoinCommunity, message }
            if *user_id == OUTSIDER && message == "You joined the community inner-circle"
    )));
}

#[tokio::test]
async fn test_accept_reuses_soft_deleted_membership_row() {
    let backend = TestBackend::seeded();
    backend
        .store
        .seed_removed_membership(OUTSIDER, PRIVATE_COMMUNITY, Some(MODERATOR));
    let request_id = backend
        .store
        .seed_pending_request(OUTSIDER, PRIVATE_COMMUNITY);
    let service = MembershipService::new(&backend.ctx);

    service
        .resolve_request(
            OWNER,
            &HandleRequestRequest {
                community_id: PRIVATE_COMMUNITY,
                request_id,
                action: "accepted".into(),
            },
        )
        .await
        .unwrap();

    assert_eq!(backend.store.membership_rows(OUTSIDER, PRIVATE_COMMUNITY), 1);
    assert!(backend
        .store
        .membership_of(OUTSIDER, PRIVATE_COMMUNITY)
        .unwrap()
        .is_active());
}

#[tokio::test]
async fn test_reject_notifies_privately_and_creates_no_membership() {
    let backend = TestBackend::seeded();
    let request_id = backend
        .store
        .seed_pending_request(OUTSIDER, PRIVATE_COMMUNITY);
    let service = MembershipService::new(&backend.ctx);

    let outcome = service
        .resolve_request(
            MODERATOR,
            &HandleRequestRequest {
                community_id: PRIVATE_COMMUNITY,
                request_id,
                action: "rejected".into(),
            },
        )
        .await
        .unwrap();

    assert_eq!(outcome.message, "Request rejected");
    assert!(!backend.store.request_exists(request_id));
    assert!(backend.store.membership_of(OUTSIDER, PRIVATE_COMMUNITY).is_none());

    // A rejection is never announced to the community room
    assert!(outcome.effects.iter().any(|e| matches!(
        e,
        Effect::Audit { entry, .. }
            if entry.action == AuditAction::Reject && entry.visibility == AuditVisibility::Private
    )));
    assert!(outcome.effects.iter().any(|e| matches!(
        e,
        Effect::Notify { kind: NotificationKind::RejectCommunity, message, .. }
            if message == "Your request to join inner-circle was rejected"
    )));
}

#[tokio::test]
async fn test_resolve_requires_user_management() {
    let backend = TestBackend::seeded();
    let request_id = backend
        .store
        .seed_pending_request(OUTSIDER, PRIVATE_COMMUNITY);
    let service = MembershipService::new(&backend.ctx);

    let err = service
        .resolve_request(
            MEMBER,
            &HandleRequestRequest {
                community_id: PRIVATE_COMMUNITY,
                request_id,
                action: "accepted".into(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 403);
    assert!(backend.store.request_exists(request_id));
}

#[tokio::test]
async fn test_accept_when_already_member_is_a_conflict() {
    let backend = TestBackend::seeded();
    let request_id = backend.store.seed_pending_request(MEMBER, PRIVATE_COMMUNITY);
    let service = MembershipService::new(&backend.ctx);

    let err = service
        .resolve_request(
            OWNER,
            &HandleRequestRequest {
                community_id: PRIVATE_COMMUNITY,
                request_id,
                action: "accepted".into(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
    assert_eq!(err.to_string(), "User is already a member of the community");
}

#[tokio::test]
async fn test_request_from_another_community_not_found() {
    let backend = TestBackend::seeded();
    let request_id = backend
        .store
        .seed_pending_request(OUTSIDER, PRIVATE_COMMUNITY);
    let service = MembershipService::new(&backend.ctx);

    let err = service
        .resolve_request(
            OWNER,
            &HandleRequestRequest {
                community_id: PUBLIC_COMMUNITY,
                request_id,
                action: "accepted".into(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 404);
    assert_eq!(err.to_string(), "Request not found");
}

#[tokio::test]
async fn test_invalid_action_rejected() {
    let backend = TestBackend::seeded();
    let request_id = backend
        .store
        .seed_pending_request(OUTSIDER, PRIVATE_COMMUNITY);
    let service = MembershipService::new(&backend.ctx);

    let err = service
        .resolve_request(
            OWNER,
            &HandleRequestRequest {
                community_id: PRIVATE_COMMUNITY,
                request_id,
                action: "maybe".into(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
}
