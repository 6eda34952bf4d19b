//! Private and community messaging tests

use community_service::dto::{
    DeleteCommunityMessageRequest, DeleteMessageRequest, SendCommunityMessageRequest,
    SendMessageRequest, UpdateCommunityMessageRequest, UpdateMessageRequest,
};
use community_service::{CommunityMessageService, PrivateMessageService, ServiceError};
use integration_tests::{TestBackend, MEMBER, MODERATOR, OUTSIDER, OWNER, PUBLIC_COMMUNITY};

// ============================================================================
// Private messages
// ============================================================================

#[tokio::test]
async fn test_send_private_message() {
    let backend = TestBackend::seeded();
    let service = PrivateMessageService::new(&backend.ctx);

    let outcome = service
        .send(
            MEMBER,
            &SendMessageRequest {
                receiver_id: OUTSIDER,
                content: "hello".into(),
            },
        )
        .await
        .unwrap();

    assert_eq!(outcome.message, "Message sent successfully");
    assert_eq!(outcome.data.sender_id, MEMBER);
    assert_eq!(outcome.data.receiver_id, OUTSIDER);
    assert!(!outcome.data.is_read);
}

#[tokio::test]
async fn test_self_send_is_invalid_state() {
    let backend = TestBackend::seeded();
    let service = PrivateMessageService::new(&backend.ctx);

    let err = service
        .send(
            MEMBER,
            &SendMessageRequest {
                receiver_id: MEMBER,
                content: "note to self".into(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
    assert_eq!(err.to_string(), "Cannot send a message to yourself");
}

#[tokio::test]
async fn test_send_to_unknown_receiver_not_found() {
    let backend = TestBackend::seeded();
    let service = PrivateMessageService::new(&backend.ctx);

    let err = service
        .send(
            MEMBER,
            &SendMessageRequest {
                receiver_id: 999,
                content: "anyone there?".into(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 404);
    assert_eq!(err.to_string(), "User not found to receiver this message");
}

#[tokio::test]
async fn test_content_over_limit_fails_validation() {
    let backend = TestBackend::seeded();
    let service = PrivateMessageService::new(&backend.ctx);

    let err = service
        .send(
            MEMBER,
            &SendMessageRequest {
                receiver_id: OUTSIDER,
                content: "x".repeat(151),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn test_sender_edits_unread_message() {
    let backend = TestBackend::seeded();
    let id = backend.store.seed_private_message(MEMBER, OUTSIDER, "draft", false);
    let service = PrivateMessageService::new(&backend.ctx);

    let outcome = service
        .update(
            MEMBER,
            &UpdateMessageRequest {
                message_id: id,
                content: "final".into(),
            },
        )
        .await
        .unwrap();

    assert_eq!(outcome.data.content, "final");
    assert!(outcome.data.is_edited);
}

#[tokio::test]
async fn test_read_message_cannot_be_edited_even_by_sender() {
    let backend = TestBackend::seeded();
    let id = backend.store.seed_private_message(MEMBER, OUTSIDER, "sent", true);
    let service = PrivateMessageService::new(&backend.ctx);

    let err = service
        .update(
            MEMBER,
            &UpdateMessageRequest {
                message_id: id,
                content: "too late".into(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 403);
    assert_eq!(
        err.to_string(),
        "You cannot edit this message because it has already been read"
    );
    assert_eq!(backend.store.private_message(id).unwrap().content, "sent");
}

#[tokio::test]
async fn test_non_sender_cannot_edit() {
    let backend = TestBackend::seeded();
    let id = backend.store.seed_private_message(MEMBER, OUTSIDER, "hi", false);
    let service = PrivateMessageService::new(&backend.ctx);

    let err = service
        .update(
            OUTSIDER,
            &UpdateMessageRequest {
                message_id: id,
                content: "hijacked".into(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 403);
    assert_eq!(err.to_string(), "You are not allowed to update this message");
}

#[tokio::test]
async fn test_delete_is_a_soft_tombstone() {
    let backend = TestBackend::seeded();
    let id = backend.store.seed_private_message(MEMBER, OUTSIDER, "oops", false);
    let service = PrivateMessageService::new(&backend.ctx);

    let outcome = service
        .delete(MEMBER, &DeleteMessageRequest { message_id: id })
        .await
        .unwrap();

    assert!(outcome.data.is_deleted());
    // Content is retained under the tombstone
    let stored = backend.store.private_message(id).unwrap();
    assert!(stored.deleted_at.is_some());
    assert_eq!(stored.content, "oops");
}

#[tokio::test]
async fn test_non_sender_cannot_delete() {
    let backend = TestBackend::seeded();
    let id = backend.store.seed_private_message(MEMBER, OUTSIDER, "hi", false);
    let service = PrivateMessageService::new(&backend.ctx);

    let err = service
        .delete(OUTSIDER, &DeleteMessageRequest { message_id: id })
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 403);
    assert_eq!(err.to_string(), "You are not allowed to delete this message");
}

#[tokio::test]
async fn test_update_unknown_message_not_found() {
    let backend = TestBackend::seeded();
    let service = PrivateMessageService::new(&backend.ctx);

    let err = service
        .update(
            MEMBER,
            &UpdateMessageRequest {
                message_id: 999,
                content: "ghost".into(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 404);
    assert_eq!(err.to_string(), "Message not found");
}

// ============================================================================
// Community messages
// ============================================================================

#[tokio::test]
async fn test_member_sends_community_message() {
    let backend = TestBackend::seeded();
    let service = CommunityMessageService::new(&backend.ctx);

    let outcome = service
        .send(
            MEMBER,
            &SendCommunityMessageRequest {
                community_id: PUBLIC_COMMUNITY,
                content: "hello room".into(),
            },
        )
        .await
        .unwrap();

    assert_eq!(outcome.data.community_id, PUBLIC_COMMUNITY);
    assert_eq!(outcome.data.sender_id, MEMBER);
}

#[tokio::test]
async fn test_non_member_cannot_send() {
    let backend = TestBackend::seeded();
    let service = CommunityMessageService::new(&backend.ctx);

    let err = service
        .send(
            OUTSIDER,
            &SendCommunityMessageRequest {
                community_id: PUBLIC_COMMUNITY,
                content: "let me in".into(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 403);
    assert_eq!(err.to_string(), "You are not a member in this community");
}

#[tokio::test]
async fn test_removed_member_cannot_send() {
    let backend = TestBackend::seeded();
    backend
        .store
        .seed_removed_membership(OUTSIDER, PUBLIC_COMMUNITY, None);
    let service = CommunityMessageService::new(&backend.ctx);

    let err = service
        .send(
            OUTSIDER,
            &SendCommunityMessageRequest {
                community_id: PUBLIC_COMMUNITY,
                content: "still here?".into(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 403);
}

#[tokio::test]
async fn test_only_the_sender_may_edit() {
    let backend = TestBackend::seeded();
    let id = backend
        .store
        .seed_community_message(PUBLIC_COMMUNITY, MEMBER, "typo");
    let service = CommunityMessageService::new(&backend.ctx);

    let outcome = service
        .update(
            MEMBER,
            &UpdateCommunityMessageRequest {
                message_id: id,
                content: "fixed".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(outcome.data.content, "fixed");
    assert!(outcome.data.is_edited);

    // Even the community owner cannot edit someone else's message
    let err = service
        .update(
            OWNER,
            &UpdateCommunityMessageRequest {
                message_id: id,
                content: "overruled".into(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 403);
    assert_eq!(err.to_string(), "You are not allowed to update the message");
}

#[tokio::test]
async fn test_delete_allowed_for_sender_owner_and_admin() {
    let backend = TestBackend::seeded();
    let service = CommunityMessageService::new(&backend.ctx);

    let by_sender = backend
        .store
        .seed_community_message(PUBLIC_COMMUNITY, MEMBER, "one");
    let by_owner = backend
        .store
        .seed_community_message(PUBLIC_COMMUNITY, MEMBER, "two");
    let by_admin = backend
        .store
        .seed_community_message(PUBLIC_COMMUNITY, MEMBER, "three");

    service
        .delete(MEMBER, &DeleteCommunityMessageRequest { message_id: by_sender })
        .await
        .unwrap();
    service
        .delete(OWNER, &DeleteCommunityMessageRequest { message_id: by_owner })
        .await
        .unwrap();
    service
        .delete(MODERATOR, &DeleteCommunityMessageRequest { message_id: by_admin })
        .await
        .unwrap();

    for id in [by_sender, by_owner, by_admin] {
        let stored = backend.store.community_message(id).unwrap();
        assert!(stored.deleted_at.is_some());
        // Soft delete keeps the content
        assert!(!stored.content.is_empty());
    }
}

#[tokio::test]
async fn test_plain_member_cannot_delete_another_members_message() {
    let backend = TestBackend::seeded();
    let id = backend
        .store
        .seed_community_message(PUBLIC_COMMUNITY, MODERATOR, "rules");
    let service = CommunityMessageService::new(&backend.ctx);

    let err = service
        .delete(MEMBER, &DeleteCommunityMessageRequest { message_id: id })
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 403);
    assert_eq!(err.to_string(), "You are not allowed to delete the message");
}

#[tokio::test]
async fn test_community_message_not_found() {
    let backend = TestBackend::seeded();
    let service = CommunityMessageService::new(&backend.ctx);

    let err = service
        .update(
            MEMBER,
            &UpdateCommunityMessageRequest {
                message_id: 999,
                content: "ghost".into(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 404);
    assert_eq!(err.to_string(), "Message not found");
}
