//! Post update/delete tests

use community_service::dto::{DeletePostRequest, UpdatePostRequest};
use community_service::PostService;
use integration_tests::{TestBackend, MEMBER, OUTSIDER, PUBLIC_COMMUNITY};

#[tokio::test]
async fn test_author_updates_post() {
    let backend = TestBackend::seeded();
    let id = backend.store.seed_post(MEMBER, PUBLIC_COMMUNITY, "v1");
    let service = PostService::new(&backend.ctx);

    let outcome = service
        .update(
            MEMBER,
            &UpdatePostRequest {
                post_id: id,
                content: "v2".into(),
            },
        )
        .await
        .unwrap();

    assert_eq!(outcome.message, "Post updated successfully");
    assert_eq!(outcome.data.content.as_deref(), Some("v2"));
    assert_eq!(backend.store.post(id).unwrap().content.as_deref(), Some("v2"));
}

#[tokio::test]
async fn test_non_author_cannot_update() {
    let backend = TestBackend::seeded();
    let id = backend.store.seed_post(MEMBER, PUBLIC_COMMUNITY, "mine");
    let service = PostService::new(&backend.ctx);

    let err = service
        .update(
            OUTSIDER,
            &UpdatePostRequest {
                post_id: id,
                content: "theirs".into(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 403);
    assert_eq!(err.to_string(), "You are not authorized to update this post");
}

#[tokio::test]
async fn test_update_missing_post_not_found() {
    let backend = TestBackend::seeded();
    let service = PostService::new(&backend.ctx);

    let err = service
        .update(
            MEMBER,
            &UpdatePostRequest {
                post_id: 999,
                content: "ghost".into(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 404);
    assert_eq!(err.to_string(), "Post not found");
}

#[tokio::test]
async fn test_delete_returns_community_for_broadcast_addressing() {
    let backend = TestBackend::seeded();
    let id = backend.store.seed_post(MEMBER, PUBLIC_COMMUNITY, "bye");
    let service = PostService::new(&backend.ctx);

    let outcome = service
        .delete(MEMBER, &DeletePostRequest { post_id: id })
        .await
        .unwrap();

    assert_eq!(outcome.message, "Post deleted successfully");
    assert_eq!(outcome.data.post_id, id);
    assert_eq!(outcome.data.community_id, PUBLIC_COMMUNITY);
    assert!(backend.store.post(id).is_none());
}

#[tokio::test]
async fn test_non_author_cannot_delete() {
    let backend = TestBackend::seeded();
    let id = backend.store.seed_post(MEMBER, PUBLIC_COMMUNITY, "mine");
    let service = PostService::new(&backend.ctx);

    let err = service
        .delete(OUTSIDER, &DeletePostRequest { post_id: id })
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 403);
    assert_eq!(err.to_string(), "You are not authorized to delete this post");
    assert!(backend.store.post(id).is_some());
}
